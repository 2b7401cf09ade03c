use crate::{
    application::error::ApplicationResult,
    domain::{
        article::{ArticleId, ArticleReadRepository},
        listing::{ListingError, ResourceKind},
        topic::{TopicRepository, TopicSlug},
    },
};
use std::sync::Arc;

/// Confirms that the parent of a collection exists. Every call queries storage.
pub struct ExistenceChecker {
    articles: Arc<dyn ArticleReadRepository>,
    topics: Arc<dyn TopicRepository>,
}

impl ExistenceChecker {
    pub fn new(articles: Arc<dyn ArticleReadRepository>, topics: Arc<dyn TopicRepository>) -> Self {
        Self { articles, topics }
    }

    pub async fn ensure_article(&self, id: ArticleId) -> ApplicationResult<()> {
        if self.articles.exists(id).await? {
            Ok(())
        } else {
            Err(ListingError::ParentNotFound(ResourceKind::Article).into())
        }
    }

    pub async fn ensure_topic(&self, slug: &TopicSlug) -> ApplicationResult<()> {
        if self.topics.exists(slug).await? {
            Ok(())
        } else {
            Err(ListingError::ParentNotFound(ResourceKind::Topic).into())
        }
    }
}
