use blogcore::platform::BlogPlatform;
pub use blogcore::platform::ConnectorOption;
#[cfg(feature = "sqlite")]
use blogcore::platform::PlatformConnector;
#[cfg(feature = "sqlite")]
use blogdb_sqlite::SqliteBackend;
use std::{
    str::FromStr,
    sync::Arc,
};
use thiserror::Error;

pub struct Backend;

#[derive(Debug, Error, PartialEq)]
pub enum Error {
    #[error("no blog backend handles the database url {0:?}")]
    UnsupportedUrl(String),
    #[error("blogdb was built without the {scheme} backend required by {url:?}")]
    BackendDisabled {
        scheme: Scheme,
        url: String,
    },
}

/// The url schemes a blog backend may be selected by.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scheme {
    Sqlite,
}

impl std::fmt::Display for Scheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Scheme::Sqlite => "sqlite",
        })
    }
}

impl FromStr for Scheme {
    type Err = Error;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        match url.split_once(':') {
            Some(("sqlite", _)) => Ok(Scheme::Sqlite),
            _ => Err(Error::UnsupportedUrl(url.to_string())),
        }
    }
}

impl Backend {
    /// Connect to the blog platform selected by the scheme of the url
    /// in the options, bringing its schema up to date.
    pub async fn blog(
        opts: impl Into<ConnectorOption> + Send,
    ) -> Result<Arc<dyn BlogPlatform>, Box<dyn std::error::Error + Send + Sync + 'static>> {
        let opts = opts.into();
        match opts.url.parse::<Scheme>()? {
            #[cfg(feature = "sqlite")]
            Scheme::Sqlite => {
                log::info!("opening sqlite blog database at {}", &opts.url);
                Ok(Arc::new(SqliteBackend::blog(opts).await?))
            }
            #[cfg(not(feature = "sqlite"))]
            scheme => Err(Box::new(Error::BackendDisabled {
                scheme,
                url: opts.url,
            })),
        }
    }
}
