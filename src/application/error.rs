// src/application/error.rs
use crate::domain::{errors::DomainError, listing::ListingError};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Collection requests: bad parameters, missing parent, page out of range.
    #[error(transparent)]
    Listing(#[from] ListingError),

    #[error("rejected request: {0}")]
    Validation(String),

    #[error("no such resource: {0}")]
    NotFound(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
