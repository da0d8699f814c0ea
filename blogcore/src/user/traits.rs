use async_trait::async_trait;
use crate::{
    error::BackendError,
    user::User,
};

#[async_trait]
pub trait UserBackend {
    async fn add_user(
        &self,
        name: &str,
    ) -> Result<i64, BackendError>;
    async fn get_user_by_id(
        &self,
        id: i64,
    ) -> Result<Option<User>, BackendError>;
    async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, BackendError>;
    async fn list_users(
        &self,
    ) -> Result<Vec<User>, BackendError>;
    /// Removes the user; posts and comments they authored go with them.
    async fn delete_user(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
