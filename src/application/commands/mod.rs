pub mod articles;
pub mod comments;
pub mod topics;

use crate::application::error::{ApplicationError, ApplicationResult};

const MISSING_FIELDS: &str = "missing required fields";

/// Unwraps a field the request body must carry.
pub(crate) fn required<T>(value: Option<T>) -> ApplicationResult<T> {
    value.ok_or_else(|| ApplicationError::validation(MISSING_FIELDS))
}
