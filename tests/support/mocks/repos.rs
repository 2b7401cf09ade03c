// tests/support/mocks/repos.rs
use super::listing::{apply_window, directed};
use super::store::InMemoryDb;
use async_trait::async_trait;
use chrono::Utc;
use newsboard::domain::{
    article::{
        Article, ArticleFilter, ArticleId, ArticleReadRepository, ArticleWriteRepository,
        NewArticle,
    },
    comment::{Comment, CommentFilter, CommentId, CommentRepository, NewComment},
    errors::{DomainError, DomainResult},
    listing::{CountSpec, PageSpec, SortColumn},
    topic::{NewTopic, Topic, TopicRepository, TopicSlug},
    user::{User, UserRepository, Username},
};

fn missing_reference() -> DomainError {
    DomainError::Validation("referenced resource does not exist".into())
}

fn matches_article(article: &Article, filter: &ArticleFilter) -> bool {
    filter
        .topic
        .as_ref()
        .is_none_or(|topic| &article.topic == topic)
}

fn compare_articles(a: &Article, b: &Article, column: SortColumn) -> std::cmp::Ordering {
    let primary = match column {
        SortColumn::Title => a.title.as_str().cmp(b.title.as_str()),
        SortColumn::Topic => a.topic.cmp(&b.topic),
        SortColumn::Author => a.author.cmp(&b.author),
        SortColumn::CreatedAt => a.created_at.cmp(&b.created_at),
        SortColumn::Votes => a.votes.cmp(&b.votes),
    };
    primary.then(a.id.cmp(&b.id))
}

fn compare_comments(a: &Comment, b: &Comment) -> std::cmp::Ordering {
    a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id))
}

#[async_trait]
impl ArticleReadRepository for InMemoryDb {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        self.record_query();
        let tables = self.tables();
        Ok(tables
            .articles
            .iter()
            .find(|a| a.id == id)
            .map(|a| tables.with_count(a)))
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        self.record_query();
        Ok(self.tables().article_exists(id))
    }

    async fn list_page(&self, spec: &PageSpec<ArticleFilter>) -> DomainResult<Vec<Article>> {
        self.record_listing_query()?;
        let tables = self.tables();
        let mut rows: Vec<Article> = tables
            .articles
            .iter()
            .filter(|a| matches_article(a, &spec.filter))
            .map(|a| tables.with_count(a))
            .collect();
        rows.sort_by(|a, b| directed(compare_articles(a, b, spec.order.column), spec.order.direction));
        Ok(apply_window(rows, spec.window))
    }

    async fn count(&self, spec: &CountSpec<ArticleFilter>) -> DomainResult<u64> {
        self.record_listing_query()?;
        let tables = self.tables();
        Ok(tables
            .articles
            .iter()
            .filter(|a| matches_article(a, &spec.filter))
            .count() as u64)
    }
}

#[async_trait]
impl ArticleWriteRepository for InMemoryDb {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let mut tables = self.tables();
        if !tables.topic_exists(&article.topic) || !tables.user_exists(&article.author) {
            return Err(missing_reference());
        }
        tables.last_article_id += 1;
        let created = Article {
            id: ArticleId::new(tables.last_article_id)?,
            title: article.title,
            topic: article.topic,
            author: article.author,
            body: article.body,
            votes: 0,
            created_at: Utc::now(),
            comment_count: 0,
        };
        tables.articles.push(created.clone());
        Ok(created)
    }

    async fn add_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        let mut tables = self.tables();
        let Some(article) = tables.articles.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };
        article.votes += delta;
        let updated = article.clone();
        Ok(Some(tables.with_count(&updated)))
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.articles.len();
        tables.articles.retain(|a| a.id != id);
        if tables.articles.len() == before {
            return Err(DomainError::NotFound("article not found".into()));
        }
        tables.comments.retain(|c| c.article_id != id);
        Ok(())
    }
}

#[async_trait]
impl CommentRepository for InMemoryDb {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let mut tables = self.tables();
        if !tables.article_exists(comment.article_id) || !tables.user_exists(&comment.author) {
            return Err(missing_reference());
        }
        tables.last_comment_id += 1;
        let created = Comment {
            id: CommentId::new(tables.last_comment_id)?,
            article_id: comment.article_id,
            author: comment.author,
            body: comment.body,
            votes: 0,
            created_at: Utc::now(),
        };
        tables.comments.push(created.clone());
        Ok(created)
    }

    async fn add_votes(&self, id: CommentId, delta: i32) -> DomainResult<Option<Comment>> {
        let mut tables = self.tables();
        Ok(tables
            .comments
            .iter_mut()
            .find(|c| c.id == id)
            .map(|comment| {
                comment.votes += delta;
                comment.clone()
            }))
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let mut tables = self.tables();
        let before = tables.comments.len();
        tables.comments.retain(|c| c.id != id);
        if tables.comments.len() == before {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list_page(&self, spec: &PageSpec<CommentFilter>) -> DomainResult<Vec<Comment>> {
        self.record_listing_query()?;
        let tables = self.tables();
        let mut rows: Vec<Comment> = tables
            .comments
            .iter()
            .filter(|c| c.article_id == spec.filter.article_id)
            .cloned()
            .collect();
        rows.sort_by(|a, b| directed(compare_comments(a, b), spec.order.direction));
        Ok(apply_window(rows, spec.window))
    }

    async fn count(&self, spec: &CountSpec<CommentFilter>) -> DomainResult<u64> {
        self.record_listing_query()?;
        let tables = self.tables();
        Ok(tables.comment_count(spec.filter.article_id))
    }
}

#[async_trait]
impl TopicRepository for InMemoryDb {
    async fn list(&self) -> DomainResult<Vec<Topic>> {
        self.record_query();
        Ok(self.tables().topics.clone())
    }

    async fn exists(&self, slug: &TopicSlug) -> DomainResult<bool> {
        self.record_query();
        Ok(self.tables().topic_exists(slug))
    }

    async fn insert(&self, topic: NewTopic) -> DomainResult<Topic> {
        let mut tables = self.tables();
        if tables.topic_exists(&topic.slug) {
            return Err(DomainError::Validation("already exists".into()));
        }
        let created = Topic {
            slug: topic.slug,
            description: topic.description,
        };
        tables.topics.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl UserRepository for InMemoryDb {
    async fn list(&self) -> DomainResult<Vec<User>> {
        self.record_query();
        Ok(self.tables().users.clone())
    }

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>> {
        self.record_query();
        Ok(self
            .tables()
            .users
            .iter()
            .find(|u| &u.username == username)
            .cloned())
    }
}
