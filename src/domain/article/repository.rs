use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::ArticleId;
use crate::domain::errors::DomainResult;
use crate::domain::listing::{CountSpec, PageSpec};
use crate::domain::topic::TopicSlug;
use async_trait::async_trait;

/// Restricts an article listing. An absent topic selects every article.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub topic: Option<TopicSlug>,
}

#[async_trait]
pub trait ArticleWriteRepository: Send + Sync {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;
    /// Adds `delta` to the vote counter. Returns `None` when no article matched.
    async fn add_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>>;
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;
}

#[async_trait]
pub trait ArticleReadRepository: Send + Sync {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;
    async fn exists(&self, id: ArticleId) -> DomainResult<bool>;
    async fn list_page(&self, spec: &PageSpec<ArticleFilter>) -> DomainResult<Vec<Article>>;
    async fn count(&self, spec: &CountSpec<ArticleFilter>) -> DomainResult<u64>;
}
