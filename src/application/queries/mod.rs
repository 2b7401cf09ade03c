pub mod articles;
pub mod comments;
pub mod existence;
pub mod topics;
pub mod users;

mod listing;
