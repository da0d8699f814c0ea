use serde::{Deserialize, Serialize};

use crate::{
    tag::Tags,
    workflow::State,
};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub body: String,
    #[serde(rename = "author")]
    pub author_id: i64,
    #[serde(default)]
    pub state: State,
    pub created_ts: i64,
    pub updated_ts: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Tags>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Posts(Vec<Post>);

/// The writable fields of a post.  The lifecycle state is deliberately
/// absent; it only changes through a transition.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct PostFields {
    pub title: String,
    pub body: String,
    #[serde(rename = "author")]
    pub author_id: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,
}

/// A partial update; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct PostPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, rename = "author", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<i64>>,
}

pub const TITLE_MAX_LEN: usize = 50;

mod impls;
pub mod traits;
