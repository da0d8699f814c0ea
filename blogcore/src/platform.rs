use async_trait::async_trait;

mod connector;
pub use connector::{
    ConnectorOption,
    PlatformConnector,
};

use crate::{
    comment::traits::CommentBackend,
    post::traits::PostBackend,
    tag::traits::TagBackend,
    user::traits::UserBackend,
};

pub trait PlatformUrl {
    fn url(&self) -> &str;
}

/// BlogPlatform - the persistence platform for the blog.
///
/// This trait is applicable to everything that correctly implements the
/// relevant backends that compose this trait.
#[async_trait]
pub trait BlogPlatform: CommentBackend
    + PostBackend
    + TagBackend
    + UserBackend

    + PlatformUrl

    + Send
    + Sync
{
    fn as_dyn(&self) -> &dyn BlogPlatform;
}

pub trait DefaultBlogPlatform: BlogPlatform {}

impl<P: CommentBackend
    + PostBackend
    + TagBackend
    + UserBackend

    + PlatformUrl

    + DefaultBlogPlatform

    + Send
    + Sync
> BlogPlatform for P {
    fn as_dyn(&self) -> &dyn BlogPlatform {
        self
    }
}
