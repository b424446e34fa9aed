//! Map marker configuration.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_icon_template() -> String {
    String::from("/assets/icons/institution-%s.png")
}

fn default_asset_root() -> String {
    String::from("public")
}

fn default_info_template() -> String {
    String::from("Institution/MapInfo")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MapConfig {
    /// Icon path with one `%s` placeholder for the type keyword.
    #[serde(default = "default_icon_template")]
    pub icon_template: String,

    /// Institution type id (as string key) to icon keyword.
    #[serde(default)]
    pub icon_mapping: BTreeMap<String, String>,

    /// Directory icon paths are resolved against for the existence check.
    #[serde(default = "default_asset_root")]
    pub asset_root: String,

    /// Template rendering the marker info window.
    #[serde(default = "default_info_template")]
    pub info_template: String,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            icon_template: default_icon_template(),
            icon_mapping: BTreeMap::new(),
            asset_root: default_asset_root(),
            info_template: default_info_template(),
        }
    }
}

impl MapConfig {
    /// Icon keyword for an institution type, `"default"` when unmapped or empty.
    #[must_use]
    pub fn icon_keyword(&self, type_id: i64) -> &str {
        self.icon_mapping
            .get(&type_id.to_string())
            .map(String::as_str)
            .filter(|keyword| !keyword.is_empty())
            .unwrap_or("default")
    }
}
