use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A taxonomy category as stored by the page's category store.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub title: String,
}
