pub mod article;
pub mod comment;
pub mod errors;
pub mod listing;
pub mod topic;
pub mod user;
