//! Weekday, relation, and selection-mode enums.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` returning the same wire form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// DayOfWeek
// ---------------------------------------------------------------------------

/// Day of the week an opening-hours entry applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }

    /// Map an ISO-8601 weekday number (1 = Monday … 7 = Sunday).
    #[must_use]
    pub const fn from_iso_number(number: u8) -> Option<Self> {
        match number {
            1 => Some(Self::Monday),
            2 => Some(Self::Tuesday),
            3 => Some(Self::Wednesday),
            4 => Some(Self::Thursday),
            5 => Some(Self::Friday),
            6 => Some(Self::Saturday),
            7 => Some(Self::Sunday),
            _ => None,
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|day| day.as_str() == needle)
            .ok_or_else(|| CoreError::InvalidValue {
                kind: "day of week",
                value: s.to_string(),
            })
    }
}

// ---------------------------------------------------------------------------
// Relation
// ---------------------------------------------------------------------------

/// Related objects the data source can embed into a fetched institution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Relation {
    Address,
    InstitutionType,
    MapChildren,
    ParentInstitutions,
    Teams,
    /// Nested under [`Relation::Teams`].
    Functions,
    /// Nested under [`Relation::Functions`].
    Person,
    /// Nested under [`Relation::Teams`].
    FunctionType,
}

impl Relation {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Address => "address",
            Self::InstitutionType => "institution_type",
            Self::MapChildren => "map_children",
            Self::ParentInstitutions => "parent_institutions",
            Self::Teams => "teams",
            Self::Functions => "functions",
            Self::Person => "person",
            Self::FunctionType => "function_type",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A relation to include, optionally with relations of the related object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Include {
    pub relation: Relation,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub nested: Vec<Include>,
}

impl Include {
    #[must_use]
    pub const fn leaf(relation: Relation) -> Self {
        Self {
            relation,
            nested: Vec::new(),
        }
    }

    #[must_use]
    pub const fn with(relation: Relation, nested: Vec<Self>) -> Self {
        Self { relation, nested }
    }

    /// Whether `relation` is requested at this level.
    #[must_use]
    pub fn contains(includes: &[Self], relation: Relation) -> bool {
        includes.iter().any(|include| include.relation == relation)
    }
}

// ---------------------------------------------------------------------------
// SelectionMode
// ---------------------------------------------------------------------------

/// How the configured institution collection restricts a listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SelectionMode {
    /// The collection holds institution ids.
    #[default]
    Institutions,
    /// The collection holds category ids.
    Categories,
}

impl SelectionMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Institutions => "institutions",
            Self::Categories => "categories",
        }
    }
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
