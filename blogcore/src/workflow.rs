use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

mod impls;
pub mod lifecycle;
pub mod transition;
pub use lifecycle::PostLifecycle;
pub use transition::Transition;

/// The lifecycle state of a post.
///
/// Every post is in exactly one of these; a newly created post starts
/// out as a `Draft`.
#[derive(Debug, Default, EnumSetType, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum State {
    #[default]
    Draft,
    Published,
    Archived,
}
