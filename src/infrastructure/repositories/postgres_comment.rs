use super::listing::{push_order, push_window};
use super::map_sqlx;
use crate::domain::article::ArticleId;
use crate::domain::comment::{
    Comment, CommentBody, CommentFilter, CommentId, CommentRepository, NewComment,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::listing::{CountSpec, PageSpec};
use crate::domain::user::Username;
use async_trait::async_trait;
use chrono::NaiveDateTime;
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

const COMMENT_COLUMNS: &str = "comment_id, article_id, author, body, votes, created_at";

#[derive(Clone)]
pub struct PostgresCommentRepository {
    pool: PgPool,
}

impl PostgresCommentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentRow {
    comment_id: i32,
    article_id: i32,
    author: String,
    body: String,
    votes: i32,
    created_at: NaiveDateTime,
}

impl TryFrom<CommentRow> for Comment {
    type Error = DomainError;

    fn try_from(row: CommentRow) -> Result<Self, Self::Error> {
        Ok(Comment {
            id: CommentId::new(row.comment_id)?,
            article_id: ArticleId::new(row.article_id)?,
            author: Username::new(row.author)?,
            body: CommentBody::new(row.body)?,
            votes: row.votes,
            created_at: row.created_at.and_utc(),
        })
    }
}

/// Comment listings are ordered by creation time only; the direction still
/// comes from the requested order.
const ORDER_COLUMN: &str = "comments.created_at";

fn push_filter(builder: &mut QueryBuilder<'_, Postgres>, filter: &CommentFilter) {
    builder.push(" WHERE comments.article_id = ");
    builder.push_bind(i32::from(filter.article_id));
}

fn page_query(spec: &PageSpec<CommentFilter>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new(format!("SELECT {COMMENT_COLUMNS} FROM comments"));
    push_filter(&mut builder, &spec.filter);
    push_order(
        &mut builder,
        ORDER_COLUMN,
        "comments.comment_id",
        spec.order,
    );
    push_window(&mut builder, spec.window);
    builder
}

fn count_query(spec: &CountSpec<CommentFilter>) -> QueryBuilder<'static, Postgres> {
    let mut builder = QueryBuilder::new("SELECT COUNT(*) FROM comments");
    push_filter(&mut builder, &spec.filter);
    builder
}

#[async_trait]
impl CommentRepository for PostgresCommentRepository {
    async fn insert(&self, comment: NewComment) -> DomainResult<Comment> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "INSERT INTO comments (article_id, author, body) VALUES ($1, $2, $3) RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(i32::from(comment.article_id))
        .bind(comment.author.as_str())
        .bind(comment.body.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Comment::try_from(row)
    }

    async fn add_votes(&self, id: CommentId, delta: i32) -> DomainResult<Option<Comment>> {
        let row = sqlx::query_as::<_, CommentRow>(&format!(
            "UPDATE comments SET votes = votes + $1 WHERE comment_id = $2 RETURNING {COMMENT_COLUMNS}"
        ))
        .bind(delta)
        .bind(i32::from(id))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        row.map(Comment::try_from).transpose()
    }

    async fn delete(&self, id: CommentId) -> DomainResult<()> {
        let result = sqlx::query("DELETE FROM comments WHERE comment_id = $1")
            .bind(i32::from(id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("comment not found".into()));
        }
        Ok(())
    }

    async fn list_page(&self, spec: &PageSpec<CommentFilter>) -> DomainResult<Vec<Comment>> {
        let rows = page_query(spec)
            .build_query_as::<CommentRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        rows.into_iter().map(Comment::try_from).collect()
    }

    async fn count(&self, spec: &CountSpec<CommentFilter>) -> DomainResult<u64> {
        let total = count_query(spec)
            .build_query_scalar::<i64>()
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(u64::try_from(total).unwrap_or_default())
    }
}
