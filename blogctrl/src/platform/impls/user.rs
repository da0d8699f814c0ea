use blogcore::user::{
    User,
    UserFields,
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
    pub async fn create_user(
        &self,
        fields: UserFields,
    ) -> Result<User, PlatformError> {
        validate_text("name", &fields.name, None)?;
        if self.blog_platform.get_user_by_name(&fields.name).await?.is_some() {
            Err(CtrlError::Invalid("name", format!("{:?} is taken", fields.name)))?
        }
        let id = self.blog_platform.add_user(&fields.name).await?;
        log::info!("created user {id} ({})", fields.name);
        self.get_user(id).await
    }

    pub async fn get_user(
        &self,
        id: i64,
    ) -> Result<User, PlatformError> {
        Ok(self.blog_platform.get_user_by_id(id).await?
            .ok_or(CtrlError::NotFound("user", id))?)
    }

    pub async fn get_user_by_name(
        &self,
        name: &str,
    ) -> Result<Option<User>, PlatformError> {
        Ok(self.blog_platform.get_user_by_name(name).await?)
    }

    pub async fn list_users(
        &self,
    ) -> Result<Vec<User>, PlatformError> {
        Ok(self.blog_platform.list_users().await?)
    }

    /// Delete the user along with every post and comment they authored.
    pub async fn delete_user(
        &self,
        id: i64,
    ) -> Result<(), PlatformError> {
        if !self.blog_platform.delete_user(id).await? {
            Err(CtrlError::NotFound("user", id))?
        }
        log::info!("deleted user {id}");
        Ok(())
    }

    /// Ensure a user referenced by another record exists.
    pub(crate) async fn require_user(
        &self,
        field: &'static str,
        id: i64,
    ) -> Result<(), PlatformError> {
        match self.blog_platform.get_user_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(CtrlError::Invalid(field, format!("no user with id {id}")))?,
        }
    }
}
