use async_trait::async_trait;
use blogcore::platform::{
    ConnectorOption,
    DefaultBlogPlatform,
    PlatformConnector,
    PlatformUrl,
};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use std::sync::Arc;

use crate::SqliteBackend;

impl PlatformUrl for SqliteBackend {
    fn url(&self) -> &str {
        self.url.as_ref()
    }
}

impl SqliteBackend {
    pub async fn connect(opts: ConnectorOption) -> Result<SqliteBackend, sqlx::Error> {
        if opts.auto_create_db && !Sqlite::database_exists(&opts.url).await.unwrap_or(false) {
            log::warn!("sqlite database {} does not exist; creating...", &opts.url);
            Sqlite::create_database(&opts.url).await?
        }

        let pool = SqlitePool::connect(&opts.url).await?;
        Ok(SqliteBackend {
            pool: Arc::new(pool),
            url: opts.url,
        })
    }

    pub async fn migrate_blog(self) -> Result<Self, sqlx::Error> {
        sqlx::migrate!("migrations/blog").run(&*self.pool).await?;
        Ok(self)
    }
}

#[async_trait]
impl PlatformConnector for SqliteBackend {
    async fn blog(opts: ConnectorOption) -> Result<Self, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let backend = SqliteBackend::connect(opts).await
            .map_err(Box::new)?
            .migrate_blog()
            .await
            .map_err(Box::new)?;
        Ok(backend)
    }
}

mod comment;
mod post;
mod tag;
mod user;

impl DefaultBlogPlatform for SqliteBackend {}
