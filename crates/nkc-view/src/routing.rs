//! Page actions and redirect targets.

use std::collections::BTreeMap;
use std::fmt;

use schemars::JsonSchema;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    List,
    Show,
    SearchForm,
    Search,
    Redirect,
}

impl Action {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Show => "show",
            Self::SearchForm => "search_form",
            Self::Search => "search",
            Self::Redirect => "redirect",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where the client is sent next.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Redirect {
    /// Another action, on `page` or the current page when `None`.
    Action {
        page: Option<i64>,
        action: Action,
        params: BTreeMap<String, String>,
    },
    /// A plain uri.
    Uri { uri: String },
}

impl Redirect {
    #[must_use]
    pub const fn to_action(page: Option<i64>, action: Action, params: BTreeMap<String, String>) -> Self {
        Self::Action {
            page,
            action,
            params,
        }
    }

    #[must_use]
    pub fn to_uri(uri: impl Into<String>) -> Self {
        Self::Uri { uri: uri.into() }
    }
}
