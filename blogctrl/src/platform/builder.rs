use std::error::Error;
use clap::{ArgAction, Parser};
use blogdb::{
    Backend,
    ConnectorOption,
};

use super::Platform;

#[derive(Clone, Debug, Default, Parser)]
pub struct Builder {
    #[clap(
        long,
        value_name = "BLOG_AUTO_CREATE_DB",
        env = "BLOG_AUTO_CREATE_DB",
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
    )]
    pub blog_auto_create_db: bool,
    #[clap(long, value_name = "BLOG_DB_URL", env = "BLOG_DB_URL")]
    pub blog_db_url: String,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blog_auto_create_db(mut self, value: bool) -> Self {
        self.blog_auto_create_db = value;
        self
    }

    pub fn blog_db_url(mut self, value: String) -> Self {
        self.blog_db_url = value;
        self
    }

    pub async fn build(self) -> Result<Platform, Box<dyn Error + Send + Sync>> {
        Ok(Platform::new(
            Backend::blog(
                ConnectorOption::from(&self.blog_db_url)
                    .auto_create_db(self.blog_auto_create_db)
            )
                .await?
        ))
    }
}
