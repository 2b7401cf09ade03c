use super::ArticleQueryService;
use crate::{
    application::{
        dto::{ArticleDto, Page},
        error::ApplicationResult,
        queries::listing,
    },
    domain::{
        article::{Article, ArticleFilter},
        listing::{ListParams, ListQuery, ListingError, ListingPlan, RawListParams},
    },
};

pub struct ListArticlesQuery {
    pub params: RawListParams,
}

impl ArticleQueryService {
    pub async fn list_articles(
        &self,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Page<ArticleDto>> {
        let params = ListParams::resolve(query.params, &self.defaults);

        let topic_exists = async {
            match &params.topic {
                Some(slug) => self.existence.ensure_topic(slug).await,
                None => Ok(()),
            }
        };

        let page = listing::with_parent(topic_exists, self.fetch_articles(&params)).await?;
        Ok(page.map(Into::into))
    }

    async fn fetch_articles(&self, params: &ListParams) -> ApplicationResult<Page<Article>> {
        let query = ListQuery::parse(params).map_err(ListingError::from)?;
        let filter = ArticleFilter {
            topic: query.topic().cloned(),
        };
        let plan = ListingPlan::build(&query, filter);

        listing::assemble_page(
            &query,
            self.read_repo.list_page(&plan.page),
            self.read_repo.count(&plan.count),
        )
        .await
    }
}
