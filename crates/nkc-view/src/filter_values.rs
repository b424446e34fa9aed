//! Choices offered by the search form.

use nkc_config::SearchConfig;
use schemars::JsonSchema;
use serde::Serialize;

use crate::category::CategoryStore;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CityOption {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct CategoryOption {
    pub uid: i64,
    pub label: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, JsonSchema)]
pub struct FilterValues {
    pub cities: Vec<CityOption>,
    pub categories: Vec<CategoryOption>,
}

/// Cities and categories configured for the search form, in configured order.
///
/// Blank city names are skipped, as are category ids the store does not know.
#[must_use]
pub fn filter_values(config: &SearchConfig, store: &dyn CategoryStore) -> FilterValues {
    let cities = config
        .city_collection
        .iter()
        .map(|city| city.trim())
        .filter(|city| !city.is_empty())
        .map(|city| CityOption {
            name: city.to_string(),
        })
        .collect();

    let categories = config
        .category_collection
        .iter()
        .filter_map(|&id| {
            let category = store.find_by_id(id);
            if category.is_none() {
                tracing::debug!(category = id, "configured category not found; skipped");
            }
            category
        })
        .map(|category| CategoryOption {
            uid: category.id,
            label: category.title,
        })
        .collect();

    FilterValues { cities, categories }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nkc_core::entities::Category;
    use pretty_assertions::assert_eq;

    struct Store;

    impl CategoryStore for Store {
        fn find_by_id(&self, id: i64) -> Option<Category> {
            (id < 10).then(|| Category {
                id,
                title: format!("Kategorie {id}"),
            })
        }
    }

    #[test]
    fn configured_values_in_order() {
        let config = SearchConfig {
            city_collection: vec!["Kiel".into(), " ".into(), " Plön ".into()],
            category_collection: vec![7, 42, 3],
            ..SearchConfig::default()
        };
        assert_eq!(
            filter_values(&config, &Store),
            FilterValues {
                cities: vec![
                    CityOption {
                        name: "Kiel".into()
                    },
                    CityOption {
                        name: "Plön".into()
                    },
                ],
                categories: vec![
                    CategoryOption {
                        uid: 7,
                        label: "Kategorie 7".into()
                    },
                    CategoryOption {
                        uid: 3,
                        label: "Kategorie 3".into()
                    },
                ],
            }
        );
    }

    #[test]
    fn nothing_configured_nothing_offered() {
        assert_eq!(
            filter_values(&SearchConfig::default(), &Store),
            FilterValues::default()
        );
    }
}
