//! View models handed to the template layer.

use nkc_core::SearchRequest;
use nkc_core::entities::Institution;
use nkc_query::InstitutionQuery;
use schemars::JsonSchema;
use serde::Serialize;

use crate::children::GroupedChildren;
use crate::filter_values::FilterValues;
use crate::markers::MapMarker;
use crate::opening_hours::OpeningHoursRow;

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ListResponse {
    pub query: InstitutionQuery,
    pub institutions: Vec<Institution>,
    pub filter: FilterValues,
    pub search_request: SearchRequest,
    /// Page the search form posts to.
    pub search_page: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct SearchFormResponse {
    pub search_page: i64,
    pub filter: FilterValues,
    pub search_request: SearchRequest,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct ShowResponse {
    pub institution: Institution,
    pub child_institutions: GroupedChildren,
    pub map_markers: Vec<MapMarker>,
    /// Empty when opening hours are disabled.
    pub opening_hours: Vec<OpeningHoursRow>,
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShowOutcome {
    Found(Box<ShowResponse>),
    NotFound { reason: String },
}

impl ShowOutcome {
    #[must_use]
    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
