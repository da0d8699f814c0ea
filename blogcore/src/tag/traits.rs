use async_trait::async_trait;
use crate::{
    error::BackendError,
    tag::{
        Tag,
        Tags,
    },
};

#[async_trait]
pub trait TagBackend {
    async fn add_tag(
        &self,
        name: &str,
    ) -> Result<i64, BackendError>;
    async fn get_tag_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Tag>, BackendError>;
    async fn list_tags(
        &self,
    ) -> Result<Tags, BackendError>;
    async fn update_tag(
        &self,
        id: i64,
        name: &str,
    ) -> Result<bool, BackendError>;
    async fn delete_tag(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
    /// Replaces the full set of tags associated with the post.
    async fn set_post_tags(
        &self,
        post_id: i64,
        tag_ids: &[i64],
    ) -> Result<(), BackendError>;
    async fn get_tags_for_post(
        &self,
        post_id: i64,
    ) -> Result<Tags, BackendError>;
}
