use crate::{
    application::{commands::required, dto::TopicDto, error::ApplicationResult},
    domain::topic::{NewTopic, TopicRepository, TopicSlug},
};
use std::sync::Arc;

pub struct CreateTopicCommand {
    pub slug: Option<String>,
    pub description: Option<String>,
}

pub struct TopicCommandService {
    topic_repo: Arc<dyn TopicRepository>,
}

impl TopicCommandService {
    pub fn new(topic_repo: Arc<dyn TopicRepository>) -> Self {
        Self { topic_repo }
    }

    pub async fn create_topic(&self, command: CreateTopicCommand) -> ApplicationResult<TopicDto> {
        let slug = TopicSlug::new(required(command.slug)?)?;
        let description = required(command.description)?;

        let created = self
            .topic_repo
            .insert(NewTopic { slug, description })
            .await?;
        Ok(created.into())
    }
}
