use std::{
    fmt,
    ops::{
        Deref,
        DerefMut,
    },
};
use super::*;

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl Tag {
    pub fn patched(&self, patch: TagPatch) -> TagFields {
        TagFields {
            name: patch.name.unwrap_or_else(|| self.name.clone()),
        }
    }
}

impl From<Vec<Tag>> for Tags {
    fn from(args: Vec<Tag>) -> Self {
        Self(args)
    }
}

impl<const N: usize> From<[Tag; N]> for Tags {
    fn from(args: [Tag; N]) -> Self {
        Self(args.into())
    }
}

impl Deref for Tags {
    type Target = Vec<Tag>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Tags {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
