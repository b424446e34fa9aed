use chrono::NaiveTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::dates::display_date;
use crate::enums::DayOfWeek;

/// One opening-hours time range of an institution.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OpeningHours {
    pub day_of_week: DayOfWeek,
    /// Optional label for the day, e.g. "Sprechstunde".
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub opens_at: Option<NaiveTime>,
    #[serde(default)]
    pub closes_at: Option<NaiveTime>,
    /// Partial ISO date (`YYYY-MM-DD`, `YYYY-MM`) as delivered by the source.
    #[serde(default)]
    pub valid_from: Option<String>,
    #[serde(default)]
    pub valid_to: Option<String>,
}

impl OpeningHours {
    #[must_use]
    pub const fn new(day_of_week: DayOfWeek) -> Self {
        Self {
            day_of_week,
            name: None,
            opens_at: None,
            closes_at: None,
            valid_from: None,
            valid_to: None,
        }
    }

    /// Label if present and non-empty.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.name.as_deref().filter(|name| !name.is_empty())
    }

    #[must_use]
    pub fn valid_from_display(&self) -> Option<String> {
        self.valid_from.as_deref().map(display_date)
    }

    #[must_use]
    pub fn valid_to_display(&self) -> Option<String> {
        self.valid_to.as_deref().map(display_date)
    }
}
