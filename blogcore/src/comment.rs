use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Comment {
    pub id: i64,
    #[serde(rename = "post")]
    pub post_id: i64,
    pub body: String,
    #[serde(rename = "author")]
    pub author_id: i64,
    pub created_ts: i64,
    pub updated_ts: i64,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Comments(Vec<Comment>);

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct CommentFields {
    #[serde(rename = "post")]
    pub post_id: i64,
    pub body: String,
    #[serde(rename = "author")]
    pub author_id: i64,
}

/// A partial update; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct CommentPatch {
    #[serde(default, rename = "post", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, rename = "author", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<i64>,
}

pub const LABEL_MAX_LEN: usize = 50;

mod impls;
pub mod traits;
