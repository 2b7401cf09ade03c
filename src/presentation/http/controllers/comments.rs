use crate::application::{
    commands::comments::{CreateCommentCommand, DeleteCommentCommand, VoteCommentCommand},
    queries::comments::ListCommentsQuery,
};
use crate::presentation::http::controllers::articles::VoteRequest;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::openapi::{CommentListResponse, CommentResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct CommentListParams {
    /// Page size; `0` returns every comment of the article.
    pub limit: Option<String>,
    /// 1-based page number.
    pub p: Option<String>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCommentRequest {
    #[serde(alias = "username")]
    pub author: Option<String>,
    pub body: Option<String>,
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}/comments",
    params(
        ("article_id" = i32, Path, description = "Article identifier"),
        CommentListParams
    ),
    responses(
        (status = 200, description = "One page of comments, newest first.", body = CommentListResponse),
        (status = 400, description = "Invalid identifier or listing parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown article or page beyond the last one.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn list_comments(
    Extension(state): Extension<HttpState>,
    ValidPath(article_id): ValidPath<i32>,
    ValidQuery(params): ValidQuery<CommentListParams>,
) -> HttpResult<Json<CommentListResponse>> {
    state
        .services
        .comment_queries
        .list_comments(ListCommentsQuery {
            article_id,
            limit: params.limit,
            p: params.p,
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    post,
    path = "/api/articles/{article_id}/comments",
    params(("article_id" = i32, Path, description = "Article identifier")),
    request_body = CreateCommentRequest,
    responses(
        (status = 201, description = "Comment created.", body = CommentResponse),
        (status = 400, description = "Missing fields or unknown author.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn create_comment(
    Extension(state): Extension<HttpState>,
    ValidPath(article_id): ValidPath<i32>,
    ValidJson(payload): ValidJson<CreateCommentRequest>,
) -> HttpResult<(StatusCode, Json<CommentResponse>)> {
    let command = CreateCommentCommand {
        article_id,
        author: payload.author,
        body: payload.body,
    };

    let comment = state
        .services
        .comment_commands
        .create_comment(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(CommentResponse { comment })))
}

#[utoipa::path(
    patch,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment identifier")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Comment with its updated vote count.", body = CommentResponse),
        (status = 400, description = "Malformed identifier or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn vote_comment(
    Extension(state): Extension<HttpState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<VoteRequest>,
) -> HttpResult<Json<CommentResponse>> {
    state
        .services
        .comment_commands
        .vote_comment(VoteCommentCommand {
            id,
            votes: payload.votes,
        })
        .await
        .into_http()
        .map(|comment| Json(CommentResponse { comment }))
}

#[utoipa::path(
    delete,
    path = "/api/comments/{comment_id}",
    params(("comment_id" = i32, Path, description = "Comment identifier")),
    responses(
        (status = 204, description = "Comment deleted."),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Comment not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Comments"
)]
pub async fn delete_comment(
    Extension(state): Extension<HttpState>,
    ValidPath(id): ValidPath<i32>,
) -> HttpResult<StatusCode> {
    state
        .services
        .comment_commands
        .delete_comment(DeleteCommentCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
