use std::{
    fmt,
    ops::{
        Deref,
        DerefMut,
    },
};
use crate::{
    error::ValueError,
    tag::Tags,
};
use super::*;

impl Post {
    /// A new, unsaved post; its lifecycle starts at `State::Draft`.
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        author_id: i64,
    ) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            author_id,
            .. Default::default()
        }
    }

    pub fn tags(&self) -> Result<&Tags, ValueError> {
        self.tags.as_ref().ok_or(ValueError::Uninitialized)
    }

    /// The full set of fields resulting from applying the patch onto
    /// this post.  Tags are only included if the patch carries them.
    pub fn patched(&self, patch: PostPatch) -> PostFields {
        PostFields {
            title: patch.title.unwrap_or_else(|| self.title.clone()),
            body: patch.body.unwrap_or_else(|| self.body.clone()),
            author_id: patch.author_id.unwrap_or(self.author_id),
            tags: patch.tags,
        }
    }
}

impl fmt::Display for Post {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.title)
    }
}

impl From<Vec<Post>> for Posts {
    fn from(args: Vec<Post>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Post; N]> for Posts {
    fn from(args: [Post; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Posts {
    type Target = Vec<Post>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Posts {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Posts {
    type Item = Post;
    type IntoIter = std::vec::IntoIter<Post>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
