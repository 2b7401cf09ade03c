// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{commands::required, dto::ArticleDto, error::ApplicationResult},
    domain::{
        article::{ArticleBody, ArticleTitle, NewArticle},
        topic::TopicSlug,
        user::Username,
    },
};

pub struct CreateArticleCommand {
    pub author: Option<String>,
    pub title: Option<String>,
    pub body: Option<String>,
    pub topic: Option<String>,
}

impl ArticleCommandService {
    /// Unknown authors or topics surface as storage validation errors.
    pub async fn create_article(
        &self,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let new_article = NewArticle {
            author: Username::new(required(command.author)?)?,
            title: ArticleTitle::new(required(command.title)?)?,
            body: ArticleBody::new(required(command.body)?)?,
            topic: TopicSlug::new(required(command.topic)?)?,
        };

        let created = self.write_repo.insert(new_article).await?;
        Ok(created.into())
    }
}
