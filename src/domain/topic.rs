use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TopicSlug(String);

impl TopicSlug {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::Validation("topic slug cannot be empty".into()));
        }
        Ok(Self(value))
    }

    /// Reads an optional `topic` query value. An empty value means no filter.
    pub fn from_query(value: Option<String>) -> Option<Self> {
        value.filter(|v| !v.trim().is_empty()).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TopicSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<TopicSlug> for String {
    fn from(value: TopicSlug) -> Self {
        value.0
    }
}

#[derive(Debug, Clone)]
pub struct Topic {
    pub slug: TopicSlug,
    pub description: String,
}

#[derive(Debug, Clone)]
pub struct NewTopic {
    pub slug: TopicSlug,
    pub description: String,
}

#[async_trait]
pub trait TopicRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<Topic>>;
    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool>;
    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic>;
}
