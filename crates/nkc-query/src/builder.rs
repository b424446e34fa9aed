//! Listing and child-institution query composition.

use nkc_core::SearchRequest;
use nkc_core::enums::SelectionMode;

use crate::filter_config::FilterConfiguration;
use crate::includes::list_includes;
use crate::query::{GeoFilter, InstitutionQuery, InstitutionQueryBuilder};
use crate::user_filters::apply_user_filters;

/// Upper bound of child institutions fetched for a detail page.
///
/// Parents with more children only show the first page.
pub const CHILD_PAGE_SIZE: u32 = 99;

/// A composed listing query plus the search input to echo back into the form.
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub query: InstitutionQuery,
    pub search_request: SearchRequest,
}

/// Compose the listing query for `current_page`.
///
/// Without user input, or with an empty form, the query is built from
/// configuration alone and an empty [`SearchRequest`] is echoed.
#[must_use]
pub fn build_list_query(
    config: &FilterConfiguration,
    current_page: i64,
    search_request: Option<SearchRequest>,
) -> ListQuery {
    let mut builder = InstitutionQuery::builder()
        .include(list_includes())
        .page(normalize_page(current_page))
        .page_size(config.page_size);

    builder = apply_collection(builder, config);
    builder = apply_institution_types(builder, config);
    builder = apply_geo(builder, config);

    let search_request = search_request.unwrap_or_default();
    if search_request.is_empty() {
        tracing::debug!("no search input; configured filters only");
    } else {
        builder = apply_user_filters(builder, &search_request);
    }

    if let Some(sort) = &config.sort_option {
        builder = builder.sort(sort.clone());
    }

    ListQuery {
        query: builder.build(),
        search_request,
    }
}

/// Query for the children of `parent_id`, capped at [`CHILD_PAGE_SIZE`].
#[must_use]
pub fn child_query(parent_id: i64) -> InstitutionQuery {
    InstitutionQuery::builder()
        .parent_institutions(vec![parent_id])
        .include(list_includes())
        .page_size(CHILD_PAGE_SIZE)
        .build()
}

/// Pages are 1-based; anything below is the first page.
fn normalize_page(current_page: i64) -> u32 {
    u32::try_from(current_page.max(1)).unwrap_or(u32::MAX)
}

fn apply_collection(
    builder: InstitutionQueryBuilder,
    config: &FilterConfiguration,
) -> InstitutionQueryBuilder {
    if config.collection.is_empty() {
        return builder;
    }
    match config.selection {
        SelectionMode::Institutions => builder.institutions(config.collection.clone()),
        SelectionMode::Categories => builder.categories(config.collection.clone()),
    }
}

fn apply_institution_types(
    builder: InstitutionQueryBuilder,
    config: &FilterConfiguration,
) -> InstitutionQueryBuilder {
    if config.institution_types.is_empty() {
        builder
    } else {
        builder.institution_types(config.institution_types.clone())
    }
}

/// The geo filter is omitted entirely unless geo search is on, both
/// coordinates are present, and the radius is positive.
fn apply_geo(
    builder: InstitutionQueryBuilder,
    config: &FilterConfiguration,
) -> InstitutionQueryBuilder {
    if !config.geo_search || config.radius <= 0.0 {
        return builder;
    }
    match (config.latitude, config.longitude) {
        (Some(latitude), Some(longitude)) => builder.geo(GeoFilter {
            latitude,
            longitude,
            radius: config.radius,
        }),
        _ => builder,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nkc_core::enums::{Include, Relation};
    use pretty_assertions::assert_eq;

    #[test]
    fn page_below_one_is_first_page() {
        assert_eq!(normalize_page(0), 1);
        assert_eq!(normalize_page(-12), 1);
        assert_eq!(normalize_page(4), 4);
        assert_eq!(normalize_page(i64::MAX), u32::MAX);
    }

    #[test]
    fn child_query_scopes_to_parent() {
        let query = child_query(42);
        assert_eq!(query.parent_institutions(), &[42]);
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), CHILD_PAGE_SIZE);
        assert_eq!(
            query.include(),
            &[
                Include::leaf(Relation::Address),
                Include::leaf(Relation::InstitutionType)
            ]
        );
    }

    #[test]
    fn geo_requires_positive_radius_and_both_coordinates() {
        let mut config = FilterConfiguration {
            geo_search: true,
            latitude: Some(54.0),
            longitude: Some(10.0),
            radius: 0.0,
            ..FilterConfiguration::default()
        };
        assert!(build_list_query(&config, 1, None).query.geo().is_none());

        config.radius = 3.0;
        config.longitude = None;
        assert!(build_list_query(&config, 1, None).query.geo().is_none());

        config.longitude = Some(10.0);
        assert_eq!(
            build_list_query(&config, 1, None).query.geo(),
            Some(&GeoFilter {
                latitude: 54.0,
                longitude: 10.0,
                radius: 3.0
            })
        );

        config.geo_search = false;
        assert!(build_list_query(&config, 1, None).query.geo().is_none());
    }
}
