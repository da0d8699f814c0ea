use blogcore::post::{
    Post,
    PostFields,
    PostPatch,
    Posts,
    TITLE_MAX_LEN,
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
    async fn validate_post_fields(
        &self,
        fields: &PostFields,
    ) -> Result<(), PlatformError> {
        validate_text("title", &fields.title, Some(TITLE_MAX_LEN))?;
        validate_text("body", &fields.body, None)?;
        self.require_user("author", fields.author_id).await?;
        if let Some(tag_ids) = fields.tags.as_deref() {
            self.require_tags(tag_ids).await?;
        }
        Ok(())
    }

    pub async fn create_post(
        &self,
        fields: PostFields,
    ) -> Result<Post, PlatformError> {
        self.validate_post_fields(&fields).await?;
        let id = self.blog_platform.add_post(
            &fields.title,
            &fields.body,
            fields.author_id,
        ).await?;
        if let Some(tag_ids) = fields.tags.as_deref() {
            self.blog_platform.set_post_tags(id, tag_ids).await?;
        }
        log::info!("created post {id} by user {}", fields.author_id);
        self.get_post(id).await
    }

    /// Load a post without its tags; this is the state the lifecycle
    /// operates on.
    pub async fn load_post(
        &self,
        id: i64,
    ) -> Result<Post, PlatformError> {
        Ok(self.blog_platform.get_post_by_id(id).await?
            .ok_or(CtrlError::NotFound("post", id))?)
    }

    pub async fn get_post(
        &self,
        id: i64,
    ) -> Result<Post, PlatformError> {
        let mut post = self.load_post(id).await?;
        post.tags = Some(self.blog_platform.get_tags_for_post(id).await?);
        Ok(post)
    }

    pub async fn list_posts(
        &self,
    ) -> Result<Posts, PlatformError> {
        let mut posts = self.blog_platform.list_posts().await?;
        for post in posts.iter_mut() {
            post.tags = Some(self.blog_platform.get_tags_for_post(post.id).await?);
        }
        Ok(posts)
    }

    pub async fn update_post(
        &self,
        id: i64,
        fields: PostFields,
    ) -> Result<Post, PlatformError> {
        let post = self.load_post(id).await?;
        if post.author_id != fields.author_id {
            Err(CtrlError::Invalid("author", "the author of a post cannot be changed".to_string()))?
        }
        self.validate_post_fields(&fields).await?;
        self.blog_platform.update_post(
            id,
            &fields.title,
            &fields.body,
            fields.author_id,
        ).await?;
        if let Some(tag_ids) = fields.tags.as_deref() {
            self.blog_platform.set_post_tags(id, tag_ids).await?;
        }
        self.get_post(id).await
    }

    pub async fn patch_post(
        &self,
        id: i64,
        patch: PostPatch,
    ) -> Result<Post, PlatformError> {
        let fields = self.load_post(id).await?.patched(patch);
        self.update_post(id, fields).await
    }

    pub async fn delete_post(
        &self,
        id: i64,
    ) -> Result<(), PlatformError> {
        if !self.blog_platform.delete_post(id).await? {
            Err(CtrlError::NotFound("post", id))?
        }
        log::info!("deleted post {id}");
        Ok(())
    }

    /// Fire a named lifecycle transition on the post as the actor and
    /// persist the result.
    ///
    /// The new state is only written if the stored state is still the
    /// one the transition was evaluated against.
    pub async fn transition_post(
        &self,
        id: i64,
        name: &str,
        actor: i64,
    ) -> Result<Post, PlatformError> {
        let mut post = self.load_post(id).await?;
        let current = post.state;
        if let Err(e) = self.lifecycle.apply(&mut post, name, actor) {
            log::warn!("post {id}: user {actor} denied {name:?}: {e}");
            Err(e)?
        }
        if !self.blog_platform.set_post_state(id, current, post.state).await? {
            log::warn!("post {id}: state changed while applying {name:?}");
            Err(CtrlError::Conflict(id))?
        }
        log::info!("post {id}: {current} -> {} by user {actor}", post.state);
        self.get_post(id).await
    }

    /// Transitions available on the post, restricted to those the actor
    /// may fire when one is provided.
    pub async fn post_transitions(
        &self,
        id: i64,
        actor: Option<i64>,
    ) -> Result<Vec<&'static str>, PlatformError> {
        let post = self.load_post(id).await?;
        Ok(self.lifecycle.available_transitions(&post, actor))
    }
}
