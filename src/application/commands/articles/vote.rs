use super::ArticleCommandService;
use crate::{
    application::{
        commands::required,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

pub struct VoteArticleCommand {
    pub id: i32,
    /// Signed increment applied to the current vote count.
    pub votes: Option<i32>,
}

impl ArticleCommandService {
    pub async fn vote_article(&self, command: VoteArticleCommand) -> ApplicationResult<ArticleDto> {
        let id = ArticleId::new(command.id)?;
        let delta = required(command.votes)?;

        let article = self
            .write_repo
            .add_votes(id, delta)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))?;
        Ok(article.into())
    }
}
