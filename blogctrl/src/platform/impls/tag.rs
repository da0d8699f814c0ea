use blogcore::tag::{
    NAME_MAX_LEN,
    Tag,
    TagFields,
    TagPatch,
    Tags,
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
    pub async fn create_tag(
        &self,
        fields: TagFields,
    ) -> Result<Tag, PlatformError> {
        validate_text("name", &fields.name, Some(NAME_MAX_LEN))?;
        self.require_unique_tag_name(&fields.name, None).await?;
        let id = self.blog_platform.add_tag(&fields.name).await?;
        self.get_tag(id).await
    }

    pub async fn get_tag(
        &self,
        id: i64,
    ) -> Result<Tag, PlatformError> {
        Ok(self.blog_platform.get_tag_by_id(id).await?
            .ok_or(CtrlError::NotFound("tag", id))?)
    }

    pub async fn list_tags(
        &self,
    ) -> Result<Tags, PlatformError> {
        Ok(self.blog_platform.list_tags().await?)
    }

    pub async fn update_tag(
        &self,
        id: i64,
        fields: TagFields,
    ) -> Result<Tag, PlatformError> {
        self.get_tag(id).await?;
        validate_text("name", &fields.name, Some(NAME_MAX_LEN))?;
        self.require_unique_tag_name(&fields.name, Some(id)).await?;
        self.blog_platform.update_tag(id, &fields.name).await?;
        self.get_tag(id).await
    }

    pub async fn patch_tag(
        &self,
        id: i64,
        patch: TagPatch,
    ) -> Result<Tag, PlatformError> {
        let fields = self.get_tag(id).await?.patched(patch);
        self.update_tag(id, fields).await
    }

    pub async fn delete_tag(
        &self,
        id: i64,
    ) -> Result<(), PlatformError> {
        if !self.blog_platform.delete_tag(id).await? {
            Err(CtrlError::NotFound("tag", id))?
        }
        Ok(())
    }

    pub async fn set_post_tags(
        &self,
        post_id: i64,
        tag_ids: &[i64],
    ) -> Result<Tags, PlatformError> {
        self.load_post(post_id).await?;
        self.require_tags(tag_ids).await?;
        self.blog_platform.set_post_tags(post_id, tag_ids).await?;
        Ok(self.blog_platform.get_tags_for_post(post_id).await?)
    }

    async fn require_unique_tag_name(
        &self,
        name: &str,
        exclude: Option<i64>,
    ) -> Result<(), PlatformError> {
        let taken = self.blog_platform.list_tags().await?
            .iter()
            .any(|tag| tag.name == name && Some(tag.id) != exclude);
        if taken {
            Err(CtrlError::Invalid("name", format!("tag {name:?} already exists")))?
        }
        Ok(())
    }

    pub(crate) async fn require_tags(
        &self,
        tag_ids: &[i64],
    ) -> Result<(), PlatformError> {
        for id in tag_ids {
            if self.blog_platform.get_tag_by_id(*id).await?.is_none() {
                Err(CtrlError::Invalid("tags", format!("no tag with id {id}")))?
            }
        }
        Ok(())
    }
}
