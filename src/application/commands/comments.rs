use crate::{
    application::{
        commands::required,
        dto::CommentDto,
        error::{ApplicationError, ApplicationResult},
        queries::existence::ExistenceChecker,
    },
    domain::{
        article::ArticleId,
        comment::{CommentBody, CommentId, CommentRepository, NewComment},
        user::Username,
    },
};
use std::sync::Arc;

pub struct CreateCommentCommand {
    pub article_id: i32,
    pub author: Option<String>,
    pub body: Option<String>,
}

pub struct VoteCommentCommand {
    pub id: i32,
    pub votes: Option<i32>,
}

pub struct DeleteCommentCommand {
    pub id: i32,
}

pub struct CommentCommandService {
    comment_repo: Arc<dyn CommentRepository>,
    existence: Arc<ExistenceChecker>,
}

impl CommentCommandService {
    pub fn new(comment_repo: Arc<dyn CommentRepository>, existence: Arc<ExistenceChecker>) -> Self {
        Self {
            comment_repo,
            existence,
        }
    }

    pub async fn create_comment(
        &self,
        command: CreateCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let article_id = ArticleId::new(command.article_id)?;
        self.existence.ensure_article(article_id).await?;

        let new_comment = NewComment {
            article_id,
            author: Username::new(required(command.author)?)?,
            body: CommentBody::new(required(command.body)?)?,
        };

        let created = self.comment_repo.insert(new_comment).await?;
        Ok(created.into())
    }

    pub async fn vote_comment(&self, command: VoteCommentCommand) -> ApplicationResult<CommentDto> {
        let id = CommentId::new(command.id)?;
        let delta = required(command.votes)?;

        let comment = self
            .comment_repo
            .add_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;
        Ok(comment.into())
    }

    pub async fn delete_comment(&self, command: DeleteCommentCommand) -> ApplicationResult<()> {
        let id = CommentId::new(command.id)?;
        self.comment_repo.delete(id).await?;
        Ok(())
    }
}
