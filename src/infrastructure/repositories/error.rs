use crate::domain::errors::DomainError;

const UNIQUE_VIOLATION: &str = "23505";
const FOREIGN_KEY_VIOLATION: &str = "23503";
const NOT_NULL_VIOLATION: &str = "23502";
const INVALID_TEXT_REPRESENTATION: &str = "22P02";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    UNIQUE_VIOLATION => {
                        return DomainError::Validation("already exists".into());
                    }
                    FOREIGN_KEY_VIOLATION => {
                        return DomainError::Validation(
                            "referenced resource does not exist".into(),
                        );
                    }
                    NOT_NULL_VIOLATION => {
                        return DomainError::Validation("missing required fields".into());
                    }
                    INVALID_TEXT_REPRESENTATION => {
                        return DomainError::Validation("bad request".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
