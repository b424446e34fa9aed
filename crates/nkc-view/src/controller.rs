//! Directory page actions.
//!
//! [`InstitutionController`] borrows its configuration and collaborators for
//! the duration of one request. Every action is synchronous and builds its own
//! query and view model.

use std::collections::BTreeMap;

use nkc_config::NkcConfig;
use nkc_core::SearchRequest;
use nkc_query::includes::detail_includes;
use nkc_query::{FilterConfiguration, build_list_query, child_query};

use crate::ViewError;
use crate::assets::AssetFiles;
use crate::category::CategoryStore;
use crate::children::group_children;
use crate::filter_values::{FilterValues, filter_values};
use crate::markers::{MarkerFactory, extract_markers};
use crate::opening_hours::normalize_opening_hours;
use crate::responses::{ListResponse, SearchFormResponse, ShowOutcome, ShowResponse};
use crate::routing::{Action, Redirect};
use crate::source::{InstitutionSource, Lookup};
use crate::template::{MapInfoView, TemplateRenderer};

/// Message for detail requests that resolve to nothing.
pub const NOT_FOUND_REASON: &str = "institution could not be found";

pub struct InstitutionController<'a> {
    config: &'a NkcConfig,
    source: &'a dyn InstitutionSource,
    categories: &'a dyn CategoryStore,
    renderer: &'a dyn TemplateRenderer,
    assets: &'a dyn AssetFiles,
}

impl<'a> InstitutionController<'a> {
    #[must_use]
    pub fn new(
        config: &'a NkcConfig,
        source: &'a dyn InstitutionSource,
        categories: &'a dyn CategoryStore,
        renderer: &'a dyn TemplateRenderer,
        assets: &'a dyn AssetFiles,
    ) -> Self {
        Self {
            config,
            source,
            categories,
            renderer,
            assets,
        }
    }

    /// Paginated, filtered institution listing.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Source`] if the list fetch fails.
    pub fn list(
        &self,
        current_page: i64,
        search_request: Option<SearchRequest>,
        page_id: i64,
    ) -> Result<ListResponse, ViewError> {
        let filter_config = FilterConfiguration::from(self.config);
        let built = build_list_query(&filter_config, current_page, search_request);
        let institutions = self.source.fetch_list(&built.query)?;
        tracing::debug!(
            page = built.query.page(),
            count = institutions.len(),
            "listing fetched"
        );

        Ok(ListResponse {
            query: built.query,
            institutions,
            filter: self.filter_values(),
            search_request: built.search_request,
            search_page: page_id,
        })
    }

    /// Search form, posting to the configured search page or the current one.
    #[must_use]
    pub fn search_form(
        &self,
        search_request: Option<SearchRequest>,
        page_id: i64,
    ) -> SearchFormResponse {
        SearchFormResponse {
            search_page: self.config.search.target_page().unwrap_or(page_id),
            filter: self.filter_values(),
            search_request: search_request.unwrap_or_default(),
        }
    }

    /// Forward submitted search input to the listing.
    #[must_use]
    pub fn search(&self, search_request: Option<SearchRequest>) -> Redirect {
        let params = search_request
            .map(|request| request.to_params())
            .unwrap_or_default();
        Redirect::to_action(None, Action::List, params)
    }

    /// Detail page of one institution.
    ///
    /// A configured single institution takes precedence over `uid`.
    ///
    /// # Errors
    ///
    /// Lookup failures become [`ShowOutcome::NotFound`]. Failures while
    /// fetching children or rendering marker info are returned as
    /// [`ViewError`].
    pub fn show(&self, uid: Option<i64>) -> Result<ShowOutcome, ViewError> {
        let Some(institution) = self.resolve(uid).into_option() else {
            return Ok(ShowOutcome::not_found(NOT_FOUND_REASON));
        };

        let children = self.source.fetch_list(&child_query(institution.id))?;
        let child_institutions =
            group_children(children, &self.config.detail.other_group_label);

        let info = MapInfoView::new(self.renderer, self.config, institution.id)?;
        let factory = MarkerFactory::new(&self.config.map, self.assets, &info);
        let map_markers =
            extract_markers(&factory, &institution, !institution.map_children.is_empty())?;

        let opening_hours = if self.config.detail.opening_hours {
            normalize_opening_hours(&institution.opening_hours)
        } else {
            Vec::new()
        };

        Ok(ShowOutcome::Found(Box::new(ShowResponse {
            institution,
            child_institutions,
            map_markers,
            opening_hours,
        })))
    }

    /// Legacy deep link: `nkci` carries an institution id.
    #[must_use]
    pub fn redirect(&self, nkci: Option<&str>) -> Redirect {
        let uid = nkci
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|uid| *uid != 0);

        match uid {
            Some(uid) => Redirect::to_action(
                self.config.search.detail_page_id,
                Action::Show,
                BTreeMap::from([("uid".to_string(), uid.to_string())]),
            ),
            None => Redirect::to_uri("/"),
        }
    }

    #[must_use]
    pub fn filter_values(&self) -> FilterValues {
        filter_values(&self.config.search, self.categories)
    }

    fn resolve(&self, uid: Option<i64>) -> Lookup {
        let includes = detail_includes();
        if let Some(reference) = self.config.detail.single_institution() {
            return Lookup::from_result(
                self.source.resolve_by_slug(reference, &includes),
                reference,
            );
        }

        match uid.filter(|uid| *uid > 0) {
            Some(uid) => Lookup::from_result(
                self.source.fetch_by_id(uid, &includes),
                &uid.to_string(),
            ),
            None => {
                tracing::debug!(?uid, "no institution requested");
                Lookup::NotFound
            }
        }
    }
}
