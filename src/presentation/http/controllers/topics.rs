use crate::application::commands::topics::CreateTopicCommand;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::ValidJson;
use crate::presentation::http::openapi::{TopicListResponse, TopicResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::ToSchema;

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateTopicRequest {
    pub slug: Option<String>,
    pub description: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/topics",
    responses(
        (status = 200, description = "Every topic.", body = TopicListResponse)
    ),
    tag = "Topics"
)]
pub async fn list_topics(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<TopicListResponse>> {
    state
        .services
        .topic_queries
        .list_topics()
        .await
        .into_http()
        .map(|topics| Json(TopicListResponse { topics }))
}

#[utoipa::path(
    post,
    path = "/api/topics",
    request_body = CreateTopicRequest,
    responses(
        (status = 201, description = "Topic created.", body = TopicResponse),
        (status = 400, description = "Missing fields or duplicate slug.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Topics"
)]
pub async fn create_topic(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<CreateTopicRequest>,
) -> HttpResult<(StatusCode, Json<TopicResponse>)> {
    let topic = state
        .services
        .topic_commands
        .create_topic(CreateTopicCommand {
            slug: payload.slug,
            description: payload.description,
        })
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(TopicResponse { topic })))
}
