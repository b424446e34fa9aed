//! Search form and routing configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SearchConfig {
    /// Pages showing search results; the first one is the form target.
    #[serde(default)]
    pub page_ids: Vec<i64>,

    /// Page hosting the detail view, target of legacy deep links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail_page_id: Option<i64>,

    /// Cities offered in the search form.
    #[serde(default)]
    pub city_collection: Vec<String>,

    /// Category ids offered in the search form.
    #[serde(default)]
    pub category_collection: Vec<i64>,
}

impl SearchConfig {
    #[must_use]
    pub fn target_page(&self) -> Option<i64> {
        self.page_ids.first().copied()
    }
}
