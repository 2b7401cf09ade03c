// src/application/services/mod.rs
use std::sync::Arc;

use crate::{
    application::{
        commands::{
            articles::ArticleCommandService, comments::CommentCommandService,
            topics::TopicCommandService,
        },
        queries::{
            articles::ArticleQueryService, comments::CommentQueryService,
            existence::ExistenceChecker, topics::TopicQueryService, users::UserQueryService,
        },
    },
    domain::{
        article::{ArticleReadRepository, ArticleWriteRepository},
        comment::CommentRepository,
        listing::ListDefaults,
        topic::TopicRepository,
        user::UserRepository,
    },
};

pub struct ApplicationServices {
    pub article_commands: Arc<ArticleCommandService>,
    pub comment_commands: Arc<CommentCommandService>,
    pub topic_commands: Arc<TopicCommandService>,
    pub article_queries: Arc<ArticleQueryService>,
    pub comment_queries: Arc<CommentQueryService>,
    pub topic_queries: Arc<TopicQueryService>,
    pub user_queries: Arc<UserQueryService>,
}

impl ApplicationServices {
    pub fn new(
        article_read_repo: Arc<dyn ArticleReadRepository>,
        article_write_repo: Arc<dyn ArticleWriteRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        topic_repo: Arc<dyn TopicRepository>,
        user_repo: Arc<dyn UserRepository>,
        list_defaults: ListDefaults,
    ) -> Self {
        let existence = Arc::new(ExistenceChecker::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&topic_repo),
        ));

        let article_commands = Arc::new(ArticleCommandService::new(Arc::clone(
            &article_write_repo,
        )));
        let comment_commands = Arc::new(CommentCommandService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&existence),
        ));
        let topic_commands = Arc::new(TopicCommandService::new(Arc::clone(&topic_repo)));

        let article_queries = Arc::new(ArticleQueryService::new(
            Arc::clone(&article_read_repo),
            Arc::clone(&existence),
            list_defaults,
        ));
        let comment_queries = Arc::new(CommentQueryService::new(
            Arc::clone(&comment_repo),
            Arc::clone(&existence),
            list_defaults,
        ));
        let topic_queries = Arc::new(TopicQueryService::new(Arc::clone(&topic_repo)));
        let user_queries = Arc::new(UserQueryService::new(Arc::clone(&user_repo)));

        Self {
            article_commands,
            comment_commands,
            topic_commands,
            article_queries,
            comment_queries,
            topic_queries,
            user_queries,
        }
    }
}
