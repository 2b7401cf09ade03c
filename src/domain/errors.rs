use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

/// Failures raised by entities, value objects and repositories.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Input the caller can fix: malformed values, missing fields, dangling
    /// references and duplicate keys.
    #[error("invalid input: {0}")]
    Validation(String),
    /// A single-row operation matched nothing.
    #[error("missing: {0}")]
    NotFound(String),
    /// Storage failed for reasons unrelated to the request.
    #[error("storage failure: {0}")]
    Persistence(String),
}
