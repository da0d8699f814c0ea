use blogcore::{
    platform::BlogPlatform,
    workflow::PostLifecycle,
};
use std::sync::Arc;

use crate::{
    error::CtrlError,
    platform::Platform,
};

impl Platform {
    pub fn new(blog_platform: Arc<dyn BlogPlatform>) -> Self {
        Self {
            blog_platform,
            lifecycle: Arc::new(PostLifecycle::default()),
        }
    }

    pub fn with_lifecycle(mut self, lifecycle: PostLifecycle) -> Self {
        self.lifecycle = Arc::new(lifecycle);
        self
    }

    pub fn blog_platform(&self) -> &dyn BlogPlatform {
        self.blog_platform.as_ref()
    }

    pub fn lifecycle(&self) -> &PostLifecycle {
        self.lifecycle.as_ref()
    }
}

pub(crate) fn validate_text(
    field: &'static str,
    value: &str,
    max_len: Option<usize>,
) -> Result<(), CtrlError> {
    if value.trim().is_empty() {
        return Err(CtrlError::Invalid(field, "must not be blank".to_string()));
    }
    if let Some(max_len) = max_len {
        if value.chars().count() > max_len {
            return Err(CtrlError::Invalid(
                field,
                format!("must be at most {max_len} characters"),
            ));
        }
    }
    Ok(())
}

mod comment;
mod post;
mod tag;
mod user;
