pub mod actor;
pub mod conf;
pub mod error;
pub mod server;
