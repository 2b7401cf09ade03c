use super::CommentQueryService;
use crate::{
    application::{
        dto::{CommentDto, Page},
        error::ApplicationResult,
        queries::listing,
    },
    domain::{
        article::ArticleId,
        comment::{Comment, CommentFilter},
        listing::{
            ListParams, ListQuery, ListingError, ListingPlan, RawListParams, ResourceKind,
            SortColumn, SortDirection,
        },
    },
};

pub struct ListCommentsQuery {
    pub article_id: i32,
    pub limit: Option<String>,
    pub p: Option<String>,
}

impl CommentQueryService {
    /// Lists the comments of one article, newest first. An id no article can
    /// carry is reported the same way as an absent article.
    pub async fn list_comments(
        &self,
        query: ListCommentsQuery,
    ) -> ApplicationResult<Page<CommentDto>> {
        let article_id = ArticleId::new(query.article_id)
            .map_err(|_| ListingError::ParentNotFound(ResourceKind::Article))?;
        let raw = RawListParams {
            topic: None,
            sort_by: Some(SortColumn::CreatedAt.as_str().into()),
            order: Some(SortDirection::Desc.as_str().into()),
            limit: query.limit,
            p: query.p,
        };
        let params = ListParams::resolve(raw, &self.defaults);

        let page = listing::with_parent(
            self.existence.ensure_article(article_id),
            self.fetch_comments(article_id, &params),
        )
        .await?;
        Ok(page.map(Into::into))
    }

    async fn fetch_comments(
        &self,
        article_id: ArticleId,
        params: &ListParams,
    ) -> ApplicationResult<Page<Comment>> {
        let query = ListQuery::parse(params).map_err(ListingError::from)?;
        let plan = ListingPlan::build(&query, CommentFilter { article_id });

        listing::assemble_page(
            &query,
            self.comment_repo.list_page(&plan.page),
            self.comment_repo.count(&plan.count),
        )
        .await
    }
}
