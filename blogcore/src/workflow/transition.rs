use enumset::EnumSet;

use crate::{
    post::Post,
    workflow::State,
};

pub const ARCHIVE: &str = "archive";
pub const DRAFT: &str = "draft";
pub const PUBLISH: &str = "publish";

/// Predicate deciding whether the actor may fire a transition on the
/// post.
pub type Guard = fn(&Post, i64) -> bool;

#[derive(Clone, Debug)]
pub struct Transition {
    /// The name a caller uses to request this transition
    pub name: &'static str,
    /// The workflow states this transition may be fired from
    pub sources: EnumSet<State>,
    /// The target workflow state
    pub target: State,
    /// A description of the goal of this transition
    pub description: &'static str,
    /// Evaluated against the post and the acting user before mutation
    pub guard: Guard,
}

/// The guard shared by every default transition: only the author of a
/// post may move it through its lifecycle.
pub fn is_author(post: &Post, actor: i64) -> bool {
    post.author_id == actor
}

mod impls;
