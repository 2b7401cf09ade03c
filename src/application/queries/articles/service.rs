use std::sync::Arc;

use crate::{
    application::queries::existence::ExistenceChecker,
    domain::{article::ArticleReadRepository, listing::ListDefaults},
};

pub struct ArticleQueryService {
    pub(super) read_repo: Arc<dyn ArticleReadRepository>,
    pub(super) existence: Arc<ExistenceChecker>,
    pub(super) defaults: ListDefaults,
}

impl ArticleQueryService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        existence: Arc<ExistenceChecker>,
        defaults: ListDefaults,
    ) -> Self {
        Self {
            read_repo,
            existence,
            defaults,
        }
    }
}
