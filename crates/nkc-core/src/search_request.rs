//! User search input submitted through the search form.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameter namespace used when a search request travels as route parameters.
pub const PARAM_NAMESPACE: &str = "searchRequest";

/// Free-text, city-or-zip, and category input of one search.
///
/// A category of `0` means "no category selected".
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SearchRequest {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub category: i64,
}

impl SearchRequest {
    #[must_use]
    pub fn new(search: impl Into<String>, city: impl Into<String>, category: i64) -> Self {
        Self {
            search: search.into(),
            city: city.into(),
            category,
        }
    }

    /// Whether no field carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search.is_empty() && self.city.is_empty() && self.category == 0
    }

    /// Flatten into route parameters (`searchRequest[search]`, ...).
    #[must_use]
    pub fn to_params(&self) -> BTreeMap<String, String> {
        BTreeMap::from([
            (param_key("search"), self.search.clone()),
            (param_key("city"), self.city.clone()),
            (param_key("category"), self.category.to_string()),
        ])
    }

    /// Bind a search request from route parameters.
    ///
    /// Only `search`, `city`, and `category` are bound; any other key in the
    /// namespace is ignored. Returns `None` when none of the three keys is
    /// present. A category that is not an integer binds as `0`.
    #[must_use]
    pub fn from_params(params: &BTreeMap<String, String>) -> Option<Self> {
        let search = params.get(&param_key("search"));
        let city = params.get(&param_key("city"));
        let category = params.get(&param_key("category"));

        if search.is_none() && city.is_none() && category.is_none() {
            return None;
        }

        Some(Self {
            search: search.cloned().unwrap_or_default(),
            city: city.cloned().unwrap_or_default(),
            category: category
                .and_then(|raw| raw.trim().parse().ok())
                .unwrap_or(0),
        })
    }
}

/// Route parameter name for `property`, e.g. `searchRequest[city]`.
#[must_use]
pub fn param_key(property: &str) -> String {
    format!("{PARAM_NAMESPACE}[{property}]")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_is_empty() {
        assert!(SearchRequest::default().is_empty());
        assert!(!SearchRequest::new("", "", 3).is_empty());
    }

    #[test]
    fn params_use_namespaced_keys() {
        let params = SearchRequest::new("kita", "Kiel", 5).to_params();
        assert_eq!(
            params.get("searchRequest[search]").map(String::as_str),
            Some("kita")
        );
        assert_eq!(
            params.get("searchRequest[city]").map(String::as_str),
            Some("Kiel")
        );
        assert_eq!(
            params.get("searchRequest[category]").map(String::as_str),
            Some("5")
        );
    }

    #[test]
    fn from_params_restores_request() {
        let request = SearchRequest::new("gemeinde", "24103", 12);
        assert_eq!(SearchRequest::from_params(&request.to_params()), Some(request));
    }

    #[test]
    fn param_key_uses_namespace() {
        assert_eq!(param_key("city"), "searchRequest[city]");
    }

    #[test]
    fn from_params_without_keys_is_none() {
        let params = BTreeMap::from([("page".to_string(), "2".to_string())]);
        assert_eq!(SearchRequest::from_params(&params), None);
    }

    #[test]
    fn from_params_ignores_unknown_properties_and_bad_category() {
        let params = BTreeMap::from([
            ("searchRequest[search]".to_string(), "chor".to_string()),
            ("searchRequest[category]".to_string(), "abc".to_string()),
            ("searchRequest[admin]".to_string(), "1".to_string()),
        ]);
        assert_eq!(
            SearchRequest::from_params(&params),
            Some(SearchRequest::new("chor", "", 0))
        );
    }
}
