//! Page configuration as seen by query composition.

use nkc_config::NkcConfig;
use nkc_core::enums::SelectionMode;

use crate::query::DEFAULT_PAGE_SIZE;

/// Configuration-driven filter dimensions of a listing page.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterConfiguration {
    pub selection: SelectionMode,
    /// Institution or category ids, per `selection`. Empty means unrestricted.
    pub collection: Vec<i64>,
    pub institution_types: Vec<i64>,
    pub geo_search: bool,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: f64,
    pub sort_option: Option<String>,
    pub page_size: u32,
}

impl Default for FilterConfiguration {
    fn default() -> Self {
        Self {
            selection: SelectionMode::default(),
            collection: Vec::new(),
            institution_types: Vec::new(),
            geo_search: false,
            latitude: None,
            longitude: None,
            radius: 0.0,
            sort_option: None,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl From<&NkcConfig> for FilterConfiguration {
    fn from(config: &NkcConfig) -> Self {
        let sort = config.listing.sort_option.trim();
        Self {
            selection: config.listing.select_option,
            collection: config.listing.collection.clone(),
            institution_types: config.listing.institution_types.clone(),
            geo_search: config.geo.enabled,
            latitude: config.geo.latitude,
            longitude: config.geo.longitude,
            radius: config.geo.radius,
            sort_option: (!sort.is_empty()).then(|| sort.to_string()),
            page_size: config.listing.items_per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_sort_option_means_source_order() {
        let mut config = NkcConfig::default();
        config.listing.sort_option = "  ".into();
        assert_eq!(FilterConfiguration::from(&config).sort_option, None);

        config.listing.sort_option = "name".into();
        assert_eq!(
            FilterConfiguration::from(&config).sort_option.as_deref(),
            Some("name")
        );
    }

    #[test]
    fn copies_listing_and_geo_sections() {
        let mut config = NkcConfig::default();
        config.listing.select_option = SelectionMode::Categories;
        config.listing.collection = vec![5, 7];
        config.listing.items_per_page = 30;
        config.geo.enabled = true;
        config.geo.latitude = Some(54.32);
        config.geo.longitude = Some(10.13);
        config.geo.radius = 8.0;

        let filter = FilterConfiguration::from(&config);
        assert_eq!(filter.selection, SelectionMode::Categories);
        assert_eq!(filter.collection, vec![5, 7]);
        assert_eq!(filter.page_size, 30);
        assert!(filter.geo_search);
        assert_eq!(filter.latitude, Some(54.32));
        assert_eq!(filter.longitude, Some(10.13));
    }
}
