pub mod articles;
pub mod comments;
pub mod pagination;
pub mod topics;
pub mod users;

pub use articles::ArticleDto;
pub use comments::CommentDto;
pub use pagination::Page;
pub use topics::TopicDto;
pub use users::UserDto;
