use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{Address, OpeningHours, Team};

/// Classification of an institution (parish, kindergarten, counselling office, ...).
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InstitutionType {
    pub id: i64,
    pub name: String,
}

/// An institution as returned by the data source.
///
/// Relations (`address`, `institution_type`, `map_children`, `teams`) are only
/// populated when the fetch asked for them; otherwise they stay at their empty
/// defaults.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Institution {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub institution_type: Option<InstitutionType>,
    #[serde(default)]
    pub address: Option<Address>,
    #[serde(default)]
    pub map_visibility: bool,
    #[serde(default)]
    pub map_children: Vec<Institution>,
    #[serde(default)]
    pub opening_hours: Vec<OpeningHours>,
    #[serde(default)]
    pub parent_institutions: Vec<i64>,
    #[serde(default)]
    pub categories: Vec<i64>,
    #[serde(default)]
    pub teams: Vec<Team>,
}

impl Institution {
    /// Minimal institution with every relation empty.
    #[must_use]
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            slug: None,
            institution_type: None,
            address: None,
            map_visibility: false,
            map_children: Vec::new(),
            opening_hours: Vec::new(),
            parent_institutions: Vec::new(),
            categories: Vec::new(),
            teams: Vec::new(),
        }
    }

    /// Id of the institution type, `0` when the type is absent.
    #[must_use]
    pub fn type_id(&self) -> i64 {
        self.institution_type.as_ref().map_or(0, |t| t.id)
    }

    /// Name of the institution type, if any.
    #[must_use]
    pub fn type_name(&self) -> Option<&str> {
        self.institution_type.as_ref().map(|t| t.name.as_str())
    }
}
