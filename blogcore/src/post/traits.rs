use async_trait::async_trait;
use crate::{
    error::BackendError,
    post::{
        Post,
        Posts,
    },
    workflow::State,
};

#[async_trait]
pub trait PostBackend {
    /// Adds a post in the `Draft` state, returning its id.
    async fn add_post(
        &self,
        title: &str,
        body: &str,
        author_id: i64,
    ) -> Result<i64, BackendError>;
    async fn get_post_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Post>, BackendError>;
    async fn list_posts(
        &self,
    ) -> Result<Posts, BackendError>;
    async fn update_post(
        &self,
        id: i64,
        title: &str,
        body: &str,
        author_id: i64,
    ) -> Result<bool, BackendError>;
    /// Persist a lifecycle state.  The write only happens if the stored
    /// state still matches `expected`; `false` is returned otherwise.
    async fn set_post_state(
        &self,
        id: i64,
        expected: State,
        state: State,
    ) -> Result<bool, BackendError>;
    async fn delete_post(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
