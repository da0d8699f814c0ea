use async_trait::async_trait;
use crate::{
    comment::{
        Comment,
        Comments,
    },
    error::BackendError,
};

#[async_trait]
pub trait CommentBackend {
    async fn add_comment(
        &self,
        post_id: i64,
        body: &str,
        author_id: i64,
    ) -> Result<i64, BackendError>;
    async fn get_comment_by_id(
        &self,
        id: i64,
    ) -> Result<Option<Comment>, BackendError>;
    async fn list_comments(
        &self,
    ) -> Result<Comments, BackendError>;
    async fn list_comments_for_post(
        &self,
        post_id: i64,
    ) -> Result<Comments, BackendError>;
    async fn update_comment(
        &self,
        id: i64,
        post_id: i64,
        body: &str,
        author_id: i64,
    ) -> Result<bool, BackendError>;
    async fn delete_comment(
        &self,
        id: i64,
    ) -> Result<bool, BackendError>;
}
