use crate::domain::article::ArticleId;
use crate::domain::comment::entity::{Comment, NewComment};
use crate::domain::comment::value_objects::CommentId;
use crate::domain::errors::DomainResult;
use crate::domain::listing::{CountSpec, PageSpec};
use async_trait::async_trait;

/// Comments are always listed in the scope of their parent article.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommentFilter {
    pub article_id: ArticleId,
}

#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment>;
    /// Adds `delta` to the vote counter. Returns `None` when no comment matched.
    async fn add_votes(&self, id: CommentId, delta: i32) -> DomainResult<Option<Comment>>;
    async fn delete(&self, id: CommentId) -> DomainResult<()>;
    async fn list_page(&self, spec: &PageSpec<CommentFilter>) -> DomainResult<Vec<Comment>>;
    async fn count(&self, spec: &CountSpec<CommentFilter>) -> DomainResult<u64>;
}
