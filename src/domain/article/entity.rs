use crate::domain::article::value_objects::{ArticleBody, ArticleId, ArticleTitle};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct Article {
    pub id: ArticleId,
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
    pub votes: i32,
    pub created_at: DateTime<Utc>,
    /// Number of comments attached to the article, aggregated at read time.
    pub comment_count: u64,
}

#[derive(Debug, Clone)]
pub struct NewArticle {
    pub title: ArticleTitle,
    pub topic: TopicSlug,
    pub author: Username,
    pub body: ArticleBody,
}
