//! Detail page configuration.

use serde::{Deserialize, Serialize};

/// Group label for child institutions without a type.
fn default_other_group_label() -> String {
    String::from("Other")
}

const fn default_opening_hours() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetailConfig {
    /// Fixed institution (url or slug) shown regardless of request arguments.
    #[serde(default)]
    pub single_institution: String,

    /// Whether the opening-hours grid is prepared.
    #[serde(default = "default_opening_hours")]
    pub opening_hours: bool,

    #[serde(default = "default_other_group_label")]
    pub other_group_label: String,
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            single_institution: String::new(),
            opening_hours: default_opening_hours(),
            other_group_label: default_other_group_label(),
        }
    }
}

impl DetailConfig {
    #[must_use]
    pub fn single_institution(&self) -> Option<&str> {
        let trimmed = self.single_institution.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }
}
