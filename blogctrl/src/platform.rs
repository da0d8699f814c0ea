use blogcore::{
    platform::BlogPlatform,
    workflow::PostLifecycle,
};
use std::sync::Arc;

mod builder;
mod impls;

pub use builder::Builder;

/// The controller for the blog.
///
/// Wraps the persistence platform together with the post lifecycle;
/// cheap to clone as both are shared.
#[derive(Clone)]
pub struct Platform {
    blog_platform: Arc<dyn BlogPlatform>,
    lifecycle: Arc<PostLifecycle>,
}
