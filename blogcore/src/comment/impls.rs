use std::ops::{
    Deref,
    DerefMut,
};
use super::*;

/// Truncate to `max_len` characters, appending `..` when anything was
/// removed.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    match s.char_indices().nth(max_len) {
        Some((idx, _)) => format!("{}..", &s[..idx]),
        None => s.to_string(),
    }
}

impl Comment {
    /// A short label for the comment: the name of its author followed
    /// by the start of its body.
    pub fn label(&self, author_name: &str) -> String {
        format!("{author_name}: {}", truncate_with_ellipsis(&self.body, LABEL_MAX_LEN))
    }

    pub fn patched(&self, patch: CommentPatch) -> CommentFields {
        CommentFields {
            post_id: patch.post_id.unwrap_or(self.post_id),
            body: patch.body.unwrap_or_else(|| self.body.clone()),
            author_id: patch.author_id.unwrap_or(self.author_id),
        }
    }
}

impl From<Vec<Comment>> for Comments {
    fn from(args: Vec<Comment>) -> Self {
        Self(args)
    }
}

impl Deref for Comments {
    type Target = Vec<Comment>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for Comments {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl IntoIterator for Comments {
    type Item = Comment;
    type IntoIter = std::vec::IntoIter<Comment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
