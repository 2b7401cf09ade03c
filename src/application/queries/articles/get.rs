use super::ArticleQueryService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::article::ArticleId,
};

/// Single article with its aggregated comment count.
pub struct GetArticleQuery {
    pub article_id: i32,
}

impl ArticleQueryService {
    pub async fn get_article(&self, query: GetArticleQuery) -> ApplicationResult<ArticleDto> {
        let Ok(article_id) = ArticleId::new(query.article_id) else {
            return Err(ApplicationError::not_found("article not found"));
        };
        match self.read_repo.find_by_id(article_id).await? {
            Some(article) => Ok(ArticleDto::from(article)),
            None => Err(ApplicationError::not_found("article not found")),
        }
    }
}
