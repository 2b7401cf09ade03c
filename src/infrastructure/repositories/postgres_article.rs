// src/infrastructure/repositories/postgres_article.rs
use super::listing::{push_order, push_window};
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleFilter, ArticleId, ArticleReadRepository, ArticleTitle,
    ArticleWriteRepository, NewArticle,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{CountSpec, PageSpec, SortColumn};
use crate::domain::topic::TopicSlug;
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const ARTICLE_SELECT: &str = "SELECT articles.article_id, articles.title, articles.topic, \
     articles.author, articles.body, articles.votes, articles.created_at, \
     COUNT(comments.comment_id) AS comment_count \
     FROM articles LEFT JOIN comments ON comments.article_id = articles.article_id";

const ARTICLE_ID_COLUMN: &str = "articles.article_id";

#[derive(Clone)]
pub struct PostgresArticleWriteRepository {
    pool: PgPool,
}

impl PostgresArticleWriteRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Clone)]
pub struct PostgresArticleReadRepository {
    pool: PgPool,
}

impl PostgresArticleReadRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    article_id: i32,
    title: String,
    topic: String,
    author: String,
    body: String,
    votes: i32,
    created_at: NaiveDateTime,
    comment_count: i64,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.article_id)?,
            title: ArticleTitle::new(row.title)?,
            topic: TopicSlug::new(row.topic)?,
            author: Username::new(row.author)?,
            body: ArticleBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at.and_utc(),
            comment_count: u64::try_from(row.comment_count).unwrap_or_default(),
        })
    }
}

fn sort_column(column: SortColumn) -> &'static str {
    match column {
        SortColumn::Title => "articles.title",
        SortColumn::Topic => "articles.topic",
        SortColumn::Author => "articles.author",
        SortColumn::CreatedAt => "articles.created_at",
        SortColumn::Votes => "articles.votes",
    }
}

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &ArticleFilter) {
    if let Some(topic) = &filter.topic {
        builder.push(" WHERE articles.topic = ");
        builder.push_bind(topic.as_str().to_owned());
    }
}

fn page_query(spec: &PageSpec<ArticleFilter>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(ARTICLE_SELECT);
    push_filter(&mut builder, &spec.filter);
    builder.push(" GROUP BY articles.article_id");
    push_order(
        &mut builder,
        sort_column(spec.order.column),
        ARTICLE_ID_COLUMN,
        spec.order,
    );
    push_window(&mut builder, spec.window);
    builder
}

fn count_query(spec: &CountSpec<ArticleFilter>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM articles");
    push_filter(&mut builder, &spec.filter);
    builder
}

#[async_trait]
impl ArticleWriteRepository for PostgresArticleWriteRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            title,
            topic,
            author,
            body,
        } = article;

        let row = sqlx::query_as::<_, ArticleRow>(
            "INSERT INTO articles (title, topic, author, body)
             VALUES ($1, $2, $3, $4)
             RETURNING article_id, title, topic, author, body, votes, created_at, 0::BIGINT AS comment_count",
        )
        .bind(title.as_str())
        .bind(topic.as_str())
        .bind(author.as_str())
        .bind(body.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Article::try_from(row)
    }

    async fn add_votes(&self, id: ArticleId, delta: i32) -> DomainResult<Option<Article>> {
        let row = sqlx::query_as::<_, ArticleRow>(
            "WITH updated AS (
                 UPDATE articles SET votes = votes + $1 WHERE article_id = $2
                 RETURNING article_id, title, topic, author, body, votes, created_at
             )
             SELECT updated.*,
                    (SELECT COUNT(*) FROM comments WHERE comments.article_id = updated.article_id) AS comment_count
             FROM updated",
        )
        .bind(delta)
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM articles WHERE article_id = $1")
            .bind(i32::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }
        Ok(())
    }
}

#[async_trait]
impl ArticleReadRepository for PostgresArticleReadRepository {
    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut builder = QueryBuilder::<Postgres>::new(ARTICLE_SELECT);
        builder.push(" WHERE articles.article_id = ");
        builder.push_bind(i32::from(id));
        builder.push(" GROUP BY articles.article_id");

        let row = builder
            .build_query_as::<ArticleRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn exists(&self, id: ArticleId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM articles WHERE article_id = $1)",
        )
        .bind(i32::from(id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn list_page(&self, spec: &PageSpec<ArticleFilter>) -> DomainResult<Vec<Article>> {
        let rows = page_query(spec)
            .build_query_as::<ArticleRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Article::try_from).collect()
    }

    async fn count(&self, spec: &CountSpec<ArticleFilter>) -> DomainResult<u64> {
        let total = count_query(spec)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
