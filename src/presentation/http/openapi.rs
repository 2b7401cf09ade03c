// src/presentation/http/openapi.rs
use crate::application::dto::{ArticleDto, CommentDto, Page, TopicDto, UserDto};
use axum::Router;
use serde::{Deserialize, Serialize};
use utoipa::{OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleListResponse {
    pub items: Vec<ArticleDto>,
    /// Articles matching the filter across every page.
    pub total_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentListResponse {
    pub items: Vec<CommentDto>,
    /// Comments on the article across every page.
    pub total_count: u64,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ArticleResponse {
    pub article: ArticleDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CommentResponse {
    pub comment: CommentDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicResponse {
    pub topic: TopicDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TopicListResponse {
    pub topics: Vec<TopicDto>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserResponse {
    pub user: UserDto,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct UserListResponse {
    pub users: Vec<UserDto>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::articles::list_articles,
        crate::presentation::http::controllers::articles::get_article,
        crate::presentation::http::controllers::articles::create_article,
        crate::presentation::http::controllers::articles::vote_article,
        crate::presentation::http::controllers::articles::delete_article,
        crate::presentation::http::controllers::comments::list_comments,
        crate::presentation::http::controllers::comments::create_comment,
        crate::presentation::http::controllers::comments::vote_comment,
        crate::presentation::http::controllers::comments::delete_comment,
        crate::presentation::http::controllers::topics::list_topics,
        crate::presentation::http::controllers::topics::create_topic,
        crate::presentation::http::controllers::users::list_users,
        crate::presentation::http::controllers::users::get_user,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ArticleListResponse,
            CommentListResponse,
            ArticleResponse,
            CommentResponse,
            TopicResponse,
            TopicListResponse,
            UserResponse,
            UserListResponse,
            crate::presentation::http::error::ErrorResponse,
            crate::presentation::http::controllers::articles::CreateArticleRequest,
            crate::presentation::http::controllers::articles::VoteRequest,
            crate::presentation::http::controllers::comments::CreateCommentRequest,
            crate::presentation::http::controllers::topics::CreateTopicRequest,
            crate::application::dto::ArticleDto,
            crate::application::dto::CommentDto,
            crate::application::dto::TopicDto,
            crate::application::dto::UserDto
        )
    ),
    tags(
        (name = "Articles", description = "Article listing and management"),
        (name = "Comments", description = "Comments attached to articles"),
        (name = "Topics", description = "Topics articles are filed under"),
        (name = "Users", description = "Registered users"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Newsboard API",
        description = "News and discussion board backend",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

pub fn docs_router() -> Router {
    Router::new().merge(SwaggerUi::new("/api/docs").url("/api/openapi.json", ApiDoc::openapi()))
}

impl From<Page<ArticleDto>> for ArticleListResponse {
    fn from(page: Page<ArticleDto>) -> Self {
        Self {
            items: page.items,
            total_count: page.total_count,
        }
    }
}

impl From<Page<CommentDto>> for CommentListResponse {
    fn from(page: Page<CommentDto>) -> Self {
        Self {
            items: page.items,
            total_count: page.total_count,
        }
    }
}
