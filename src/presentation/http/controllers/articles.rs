// src/presentation/http/controllers/articles.rs
use crate::application::{
    commands::articles::{CreateArticleCommand, DeleteArticleCommand, VoteArticleCommand},
    queries::articles::{GetArticleQuery, ListArticlesQuery},
};
use crate::domain::listing::RawListParams;
use crate::presentation::http::error::{HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ValidJson, ValidPath, ValidQuery};
use crate::presentation::http::openapi::{ArticleListResponse, ArticleResponse};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json, http::StatusCode};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

/// Query string of the article listing. Values are validated downstream so
/// that malformed input yields the listing's own error messages.
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
#[into_params(parameter_in = Query)]
pub struct ArticleListParams {
    /// Topic slug to filter by. Empty means every topic.
    pub topic: Option<String>,
    /// One of `title`, `topic`, `author`, `created_at`, `votes`.
    pub sort_by: Option<String>,
    /// `asc` or `desc`, case-insensitive.
    pub order: Option<String>,
    /// Page size; `0` returns every matching article.
    pub limit: Option<String>,
    /// 1-based page number.
    pub p: Option<String>,
}

impl From<ArticleListParams> for RawListParams {
    fn from(params: ArticleListParams) -> Self {
        Self {
            topic: params.topic,
            sort_by: params.sort_by,
            order: params.order,
            limit: params.limit,
            p: params.p,
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateArticleRequest {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

/// Signed increment applied to the current vote count.
#[derive(Debug, Deserialize, ToSchema)]
pub struct VoteRequest {
    pub votes: Option<i32>,
}

#[utoipa::path(
    get,
    path = "/api/articles",
    params(ArticleListParams),
    responses(
        (status = 200, description = "One page of articles with the total match count.", body = ArticleListResponse),
        (status = 400, description = "Invalid listing parameters.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Unknown topic or page beyond the last one.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn list_articles(
    Extension(state): Extension<HttpState>,
    ValidQuery(params): ValidQuery<ArticleListParams>,
) -> HttpResult<Json<ArticleListResponse>> {
    state
        .services
        .article_queries
        .list_articles(ListArticlesQuery {
            params: params.into(),
        })
        .await
        .into_http()
        .map(|page| Json(page.into()))
}

#[utoipa::path(
    get,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article identifier")),
    responses(
        (status = 200, description = "Article with its comment count.", body = ArticleResponse),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn get_article(
    Extension(state): Extension<HttpState>,
    ValidPath(id): ValidPath<i32>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_queries
        .get_article(GetArticleQuery { article_id: id })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    post,
    path = "/api/articles",
    request_body = CreateArticleRequest,
    responses(
        (status = 201, description = "Article created.", body = ArticleResponse),
        (status = 400, description = "Missing fields or unknown author or topic.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn create_article(
    Extension(state): Extension<HttpState>,
    ValidJson(payload): ValidJson<CreateArticleRequest>,
) -> HttpResult<(StatusCode, Json<ArticleResponse>)> {
    let command = CreateArticleCommand {
        author: payload.author,
        title: payload.title,
        body: payload.body,
        topic: payload.topic,
    };

    let article = state
        .services
        .article_commands
        .create_article(command)
        .await
        .into_http()?;

    Ok((StatusCode::CREATED, Json(ArticleResponse { article })))
}

#[utoipa::path(
    patch,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article identifier")),
    request_body = VoteRequest,
    responses(
        (status = 200, description = "Article with its updated vote count.", body = ArticleResponse),
        (status = 400, description = "Malformed identifier or body.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn vote_article(
    Extension(state): Extension<HttpState>,
    ValidPath(id): ValidPath<i32>,
    ValidJson(payload): ValidJson<VoteRequest>,
) -> HttpResult<Json<ArticleResponse>> {
    state
        .services
        .article_commands
        .vote_article(VoteArticleCommand {
            id,
            votes: payload.votes,
        })
        .await
        .into_http()
        .map(|article| Json(ArticleResponse { article }))
}

#[utoipa::path(
    delete,
    path = "/api/articles/{article_id}",
    params(("article_id" = i32, Path, description = "Article identifier")),
    responses(
        (status = 204, description = "Article deleted."),
        (status = 400, description = "Malformed identifier.", body = crate::presentation::http::error::ErrorResponse),
        (status = 404, description = "Article not found.", body = crate::presentation::http::error::ErrorResponse)
    ),
    tag = "Articles"
)]
pub async fn delete_article(
    Extension(state): Extension<HttpState>,
    ValidPath(id): ValidPath<i32>,
) -> HttpResult<StatusCode> {
    state
        .services
        .article_commands
        .delete_article(DeleteArticleCommand { id })
        .await
        .into_http()?;
    Ok(StatusCode::NO_CONTENT)
}
