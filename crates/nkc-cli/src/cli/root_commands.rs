use std::collections::BTreeMap;

use clap::{Args, Subcommand};
use nkc_core::SearchRequest;
use nkc_core::search_request::param_key;

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Paginated, filtered institution listing.
    List(ListArgs),
    /// Detail view of one institution.
    Show(ShowArgs),
    /// Search form with its filter choices.
    SearchForm(SearchArgs),
    /// Submit search input and print the resulting redirect.
    Search(SearchArgs),
    /// Resolve a legacy `nkci` deep link.
    Redirect(RedirectArgs),
}

/// User search input shared by list and search commands.
#[derive(Clone, Debug, Default, Args)]
pub struct SearchArgs {
    /// Free-text search
    #[arg(long)]
    pub search: Option<String>,

    /// City names (comma separated) or a zip code
    #[arg(long)]
    pub city: Option<String>,

    /// Category id
    #[arg(long)]
    pub category: Option<i64>,
}

impl SearchArgs {
    /// Given flags as `searchRequest[...]` route parameters.
    #[must_use]
    pub fn to_params(&self) -> BTreeMap<String, String> {
        [
            ("search", self.search.clone()),
            ("city", self.city.clone()),
            ("category", self.category.map(|id| id.to_string())),
        ]
        .into_iter()
        .filter_map(|(property, value)| Some((param_key(property), value?)))
        .collect()
    }

    /// Bound the same way as submitted form parameters; `None` when no
    /// search field was given at all.
    #[must_use]
    pub fn to_request(&self) -> Option<SearchRequest> {
        SearchRequest::from_params(&self.to_params())
    }
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    /// Page number, 1-based
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(Clone, Debug, Args)]
pub struct ShowArgs {
    /// Institution id
    #[arg(long)]
    pub uid: Option<i64>,
}

#[derive(Clone, Debug, Args)]
pub struct RedirectArgs {
    /// Legacy institution id parameter
    #[arg(long)]
    pub nkci: Option<String>,
}
