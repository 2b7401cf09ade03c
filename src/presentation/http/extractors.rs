// src/presentation/http/extractors.rs
use super::error::HttpError;
use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

const BAD_REQUEST: &str = "bad request";
const INVALID_BODY: &str = "invalid request body";

/// `Path` whose rejection is reported as a 400 `{msg}` body.
#[derive(Debug, Clone)]
pub struct ValidPath<T>(pub T);

/// `Query` whose rejection is reported as a 400 `{msg}` body.
#[derive(Debug, Clone)]
pub struct ValidQuery<T>(pub T);

/// `Json` whose rejection is reported as a 400 `{msg}` body.
#[derive(Debug, Clone)]
pub struct ValidJson<T>(pub T);

impl<T, S> FromRequestParts<S> for ValidPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(Path(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "path rejected");
                Err(HttpError::bad_request(BAD_REQUEST))
            }
        }
    }
}

impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(Query(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "query rejected");
                Err(HttpError::bad_request(BAD_REQUEST))
            }
        }
    }
}

impl<T, S> FromRequest<S> for ValidJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "json body rejected");
                Err(HttpError::bad_request(INVALID_BODY))
            }
        }
    }
}
