//! Listing configuration: which institutions a list page shows and how.

use nkc_core::enums::SelectionMode;
use serde::{Deserialize, Serialize};

/// Default page size of a listing.
const fn default_items_per_page() -> u32 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ListingConfig {
    /// How `collection` is interpreted.
    #[serde(default)]
    pub select_option: SelectionMode,

    /// Institution or category ids, depending on `select_option`.
    /// Empty means unrestricted.
    #[serde(default)]
    pub collection: Vec<i64>,

    /// Restrict the listing to these institution type ids.
    #[serde(default)]
    pub institution_types: Vec<i64>,

    /// Sort directive forwarded to the data source. Empty keeps source order.
    #[serde(default)]
    pub sort_option: String,

    #[serde(default = "default_items_per_page")]
    pub items_per_page: u32,
}

impl Default for ListingConfig {
    fn default() -> Self {
        Self {
            select_option: SelectionMode::default(),
            collection: Vec::new(),
            institution_types: Vec::new(),
            sort_option: String::new(),
            items_per_page: default_items_per_page(),
        }
    }
}
