// tests/support/mocks/store.rs
use chrono::{DateTime, Utc};
use newsboard::domain::{
    article::{Article, ArticleBody, ArticleId, ArticleTitle},
    comment::{Comment, CommentBody, CommentId},
    errors::{DomainError, DomainResult},
    topic::{Topic, TopicSlug},
    user::{User, Username},
};
use std::sync::{
    Arc, Mutex, MutexGuard,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

#[derive(Default)]
pub(super) struct Tables {
    pub topics: Vec<Topic>,
    pub users: Vec<User>,
    /// `comment_count` is always stored as zero and computed on read.
    pub articles: Vec<Article>,
    pub comments: Vec<Comment>,
    pub last_article_id: i32,
    pub last_comment_id: i32,
}

impl Tables {
    pub fn comment_count(&self, id: ArticleId) -> u64 {
        self.comments.iter().filter(|c| c.article_id == id).count() as u64
    }

    pub fn with_count(&self, article: &Article) -> Article {
        let mut article = article.clone();
        article.comment_count = self.comment_count(article.id);
        article
    }

    pub fn topic_exists(&self, slug: &TopicSlug) -> bool {
        self.topics.iter().any(|t| &t.slug == slug)
    }

    pub fn user_exists(&self, username: &Username) -> bool {
        self.users.iter().any(|u| &u.username == username)
    }

    pub fn article_exists(&self, id: ArticleId) -> bool {
        self.articles.iter().any(|a| a.id == id)
    }
}

#[derive(Default)]
struct Inner {
    tables: Mutex<Tables>,
    queries: AtomicUsize,
    failing: AtomicBool,
}

/// インメモリのデータストア。全リポジトリトレイトを実装する。
#[derive(Clone, Default)]
pub struct InMemoryDb {
    inner: Arc<Inner>,
}

impl InMemoryDb {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn tables(&self) -> MutexGuard<'_, Tables> {
        self.inner.tables.lock().unwrap()
    }

    pub(super) fn record_query(&self) {
        self.inner.queries.fetch_add(1, Ordering::SeqCst);
    }

    /// Records a page or count query and fails it when failure injection is on.
    pub(super) fn record_listing_query(&self) -> DomainResult<()> {
        self.record_query();
        if self.inner.failing.load(Ordering::SeqCst) {
            return Err(DomainError::Persistence("connection refused".into()));
        }
        Ok(())
    }

    /// Number of read queries issued so far.
    pub fn query_count(&self) -> usize {
        self.inner.queries.load(Ordering::SeqCst)
    }

    /// Makes every listing query (page and count) fail with a storage error.
    pub fn fail_listings(&self, failing: bool) {
        self.inner.failing.store(failing, Ordering::SeqCst);
    }

    pub fn add_topic(&self, slug: &str, description: &str) {
        self.tables().topics.push(Topic {
            slug: TopicSlug::new(slug).unwrap(),
            description: description.into(),
        });
    }

    pub fn add_user(&self, username: &str, name: &str) {
        self.tables().users.push(User {
            username: Username::new(username).unwrap(),
            name: name.into(),
            avatar_url: Some(format!("https://avatars.example.com/{username}.png")),
        });
    }

    pub fn add_article(
        &self,
        title: &str,
        topic: &str,
        author: &str,
        votes: i32,
        created_at: DateTime<Utc>,
    ) -> i32 {
        let mut tables = self.tables();
        tables.last_article_id += 1;
        let id = tables.last_article_id;
        tables.articles.push(Article {
            id: ArticleId::new(id).unwrap(),
            title: ArticleTitle::new(title).unwrap(),
            topic: TopicSlug::new(topic).unwrap(),
            author: Username::new(author).unwrap(),
            body: ArticleBody::new(format!("{title} body")).unwrap(),
            votes,
            created_at,
            comment_count: 0,
        });
        id
    }

    pub fn add_comment(
        &self,
        article_id: i32,
        author: &str,
        body: &str,
        votes: i32,
        created_at: DateTime<Utc>,
    ) -> i32 {
        let mut tables = self.tables();
        tables.last_comment_id += 1;
        let id = tables.last_comment_id;
        tables.comments.push(Comment {
            id: CommentId::new(id).unwrap(),
            article_id: ArticleId::new(article_id).unwrap(),
            author: Username::new(author).unwrap(),
            body: CommentBody::new(body).unwrap(),
            votes,
            created_at,
        });
        id
    }
}
