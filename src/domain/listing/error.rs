use std::fmt;
use thiserror::Error;

/// Rejection reasons for collection query parameters, in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListValidationError {
    #[error("invalid sort_by: expected one of title, topic, author, created_at, votes")]
    InvalidSortColumn,
    #[error("invalid order: expected asc or desc")]
    InvalidSortDirection,
    #[error("invalid limit: expected a whole number")]
    InvalidLimit,
    #[error("invalid p: expected a whole number")]
    InvalidPage,
    #[error("limit must not be negative and p must be at least 1")]
    NonPositivePaging,
}

/// Parent resources a collection can be scoped to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceKind {
    Article,
    Topic,
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Article => f.write_str("article"),
            Self::Topic => f.write_str("topic"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListingError {
    #[error(transparent)]
    Invalid(#[from] ListValidationError),
    #[error("{0} not found")]
    ParentNotFound(ResourceKind),
    #[error("page not found: p is beyond the last page for this limit")]
    PageOutOfRange,
}
