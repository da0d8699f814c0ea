use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, Ord, PartialEq, PartialOrd, Deserialize, Serialize)]
pub struct Tag {
    pub id: i64,
    pub name: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct Tags(Vec<Tag>);

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TagFields {
    pub name: String,
}

/// A partial update; absent fields keep their current value.
#[derive(Clone, Debug, Default, PartialEq, Deserialize, Serialize)]
pub struct TagPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

pub const NAME_MAX_LEN: usize = 30;

mod impls;
pub mod traits;
