use blogcore::comment::{
    Comment,
    CommentFields,
    CommentPatch,
    Comments,
};

use crate::{
    error::{
        CtrlError,
        PlatformError,
    },
    platform::{
        Platform,
        impls::validate_text,
    },
};

impl Platform {
    async fn validate_comment_fields(
        &self,
        fields: &CommentFields,
    ) -> Result<(), PlatformError> {
        validate_text("body", &fields.body, None)?;
        if self.blog_platform.get_post_by_id(fields.post_id).await?.is_none() {
            Err(CtrlError::Invalid("post", format!("no post with id {}", fields.post_id)))?
        }
        self.require_user("author", fields.author_id).await
    }

    pub async fn create_comment(
        &self,
        fields: CommentFields,
    ) -> Result<Comment, PlatformError> {
        self.validate_comment_fields(&fields).await?;
        let id = self.blog_platform.add_comment(
            fields.post_id,
            &fields.body,
            fields.author_id,
        ).await?;
        log::info!("created comment {id} on post {}", fields.post_id);
        self.get_comment(id).await
    }

    pub async fn get_comment(
        &self,
        id: i64,
    ) -> Result<Comment, PlatformError> {
        Ok(self.blog_platform.get_comment_by_id(id).await?
            .ok_or(CtrlError::NotFound("comment", id))?)
    }

    pub async fn list_comments(
        &self,
    ) -> Result<Comments, PlatformError> {
        Ok(self.blog_platform.list_comments().await?)
    }

    pub async fn list_comments_for_post(
        &self,
        post_id: i64,
    ) -> Result<Comments, PlatformError> {
        self.load_post(post_id).await?;
        Ok(self.blog_platform.list_comments_for_post(post_id).await?)
    }

    pub async fn update_comment(
        &self,
        id: i64,
        fields: CommentFields,
    ) -> Result<Comment, PlatformError> {
        self.get_comment(id).await?;
        self.validate_comment_fields(&fields).await?;
        self.blog_platform.update_comment(
            id,
            fields.post_id,
            &fields.body,
            fields.author_id,
        ).await?;
        self.get_comment(id).await
    }

    pub async fn patch_comment(
        &self,
        id: i64,
        patch: CommentPatch,
    ) -> Result<Comment, PlatformError> {
        let fields = self.get_comment(id).await?.patched(patch);
        self.update_comment(id, fields).await
    }

    pub async fn delete_comment(
        &self,
        id: i64,
    ) -> Result<(), PlatformError> {
        if !self.blog_platform.delete_comment(id).await? {
            Err(CtrlError::NotFound("comment", id))?
        }
        Ok(())
    }
}
