use std::sync::Arc;

use crate::{
    application::queries::existence::ExistenceChecker,
    domain::{comment::CommentRepository, listing::ListDefaults},
};

pub struct CommentQueryService {
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) existence: Arc<ExistenceChecker>,
    pub(super) defaults: ListDefaults,
}

impl CommentQueryService {
    pub fn new(
        comment_repo: Arc<dyn CommentRepository>,
        existence: Arc<ExistenceChecker>,
        defaults: ListDefaults,
    ) -> Self {
        Self {
            comment_repo,
            existence,
            defaults,
        }
    }
}
