pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{Comment, NewComment};
pub use repository::{CommentFilter, CommentRepository};
pub use value_objects::{CommentBody, CommentId};
