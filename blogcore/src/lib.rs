pub mod comment;
pub mod error;
pub mod platform;
pub mod post;
pub mod tag;
pub mod user;
pub mod workflow;
