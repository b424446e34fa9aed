//! In-memory collaborators.
//!
//! [`InMemorySource`] evaluates an [`InstitutionQuery`] against a fixed set
//! of institutions, which makes the full request pipeline usable offline.

use std::collections::BTreeMap;

use nkc_core::entities::{Category, Institution};
use nkc_core::enums::{Include, Relation};
use nkc_query::{GeoFilter, InstitutionQuery};
use serde::Deserialize;

use crate::category::CategoryStore;
use crate::source::{InstitutionSource, SourceError};

const EARTH_RADIUS_KM: f64 = 6371.0;

/// Institutions and categories loaded from a JSON document.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub institutions: Vec<Institution>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

impl Dataset {
    /// # Errors
    ///
    /// Returns [`SourceError::Malformed`] if `json` is not a dataset document.
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        serde_json::from_str(json).map_err(|e| SourceError::Malformed(e.to_string()))
    }

    #[must_use]
    pub fn into_parts(self) -> (InMemorySource, InMemoryCategories) {
        (
            InMemorySource::new(self.institutions),
            InMemoryCategories::new(self.categories),
        )
    }
}

#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    institutions: Vec<Institution>,
}

impl InMemorySource {
    #[must_use]
    pub const fn new(institutions: Vec<Institution>) -> Self {
        Self { institutions }
    }

    fn find(&self, predicate: impl Fn(&Institution) -> bool) -> Option<&Institution> {
        self.institutions
            .iter()
            .find(|&institution| predicate(institution))
    }
}

impl InstitutionSource for InMemorySource {
    fn fetch_list(&self, query: &InstitutionQuery) -> Result<Vec<Institution>, SourceError> {
        let mut matches: Vec<&Institution> = self
            .institutions
            .iter()
            .filter(|institution| matches_query(institution, query))
            .collect();

        match query.sort() {
            Some("name") => matches.sort_by(|a, b| a.name.cmp(&b.name)),
            Some("city") => matches.sort_by(|a, b| city_of(a).cmp(&city_of(b))),
            Some(other) => tracing::debug!(sort = other, "unknown sort option; source order kept"),
            None => {}
        }

        let skip = usize::try_from(query.offset()).unwrap_or(usize::MAX);
        let take = usize::try_from(query.page_size()).unwrap_or(usize::MAX);
        Ok(matches
            .into_iter()
            .skip(skip)
            .take(take)
            .map(|institution| project(institution, query.include()))
            .collect())
    }

    fn fetch_by_id(&self, id: i64, includes: &[Include]) -> Result<Institution, SourceError> {
        self.find(|institution| institution.id == id)
            .map(|institution| project(institution, includes))
            .ok_or_else(|| SourceError::NotFound(id.to_string()))
    }

    /// Accepts a slug, or a reference whose last `/` or `:` segment is an id
    /// or slug.
    fn resolve_by_slug(
        &self,
        slug: &str,
        includes: &[Include],
    ) -> Result<Institution, SourceError> {
        let tail = slug
            .rsplit(['/', ':'])
            .next()
            .unwrap_or(slug)
            .trim();
        let id = tail.parse::<i64>().ok();

        self.find(|institution| {
            institution
                .slug
                .as_deref()
                .is_some_and(|own| own == slug || own == tail)
                || Some(institution.id) == id
        })
        .map(|institution| project(institution, includes))
        .ok_or_else(|| SourceError::NotFound(slug.to_string()))
    }
}

/// Categories keyed by id.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCategories {
    categories: BTreeMap<i64, Category>,
}

impl InMemoryCategories {
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c)).collect(),
        }
    }
}

impl CategoryStore for InMemoryCategories {
    fn find_by_id(&self, id: i64) -> Option<Category> {
        self.categories.get(&id).cloned()
    }
}

fn matches_query(institution: &Institution, query: &InstitutionQuery) -> bool {
    let address = institution.address.as_ref();
    let zip = address.and_then(|a| a.zip_code.as_deref());
    let city = address.and_then(|a| a.city.as_deref());

    within(query.institutions(), |ids| ids.contains(&institution.id))
        && within(query.parent_institutions(), |ids| {
            institution.parent_institutions.iter().any(|p| ids.contains(p))
        })
        && within(query.institution_types(), |ids| {
            ids.contains(&institution.type_id())
        })
        && within(query.categories(), |ids| {
            institution.categories.iter().any(|c| ids.contains(c))
        })
        && within(query.zip_codes(), |zips| {
            zip.is_some_and(|zip| zips.iter().any(|z| z == zip))
        })
        && within(query.cities(), |cities| {
            city.is_some_and(|city| cities.iter().any(|c| c.eq_ignore_ascii_case(city)))
        })
        && query.query().is_none_or(|text| {
            let needle = text.to_lowercase();
            institution.name.to_lowercase().contains(&needle)
                || city.is_some_and(|city| city.to_lowercase().contains(&needle))
        })
        && query.geo().is_none_or(|geo| in_radius(institution, geo))
}

/// Empty restriction lists match everything.
fn within<T>(restriction: &[T], test: impl FnOnce(&[T]) -> bool) -> bool {
    restriction.is_empty() || test(restriction)
}

fn in_radius(institution: &Institution, geo: &GeoFilter) -> bool {
    let Some(address) = institution.address.as_ref() else {
        return false;
    };
    match (address.latitude, address.longitude) {
        (Some(latitude), Some(longitude)) => {
            haversine_km(geo.latitude, geo.longitude, latitude, longitude) <= geo.radius
        }
        _ => false,
    }
}

fn haversine_km(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (d_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * a.sqrt().asin()
}

fn city_of(institution: &Institution) -> Option<&str> {
    institution.address.as_ref().and_then(|a| a.city.as_deref())
}

/// Clear relations the caller did not ask for.
fn project(institution: &Institution, includes: &[Include]) -> Institution {
    let mut projected = institution.clone();
    if !Include::contains(includes, Relation::Address) {
        projected.address = None;
    }
    if !Include::contains(includes, Relation::InstitutionType) {
        projected.institution_type = None;
    }
    if !Include::contains(includes, Relation::MapChildren) {
        projected.map_children.clear();
    }
    if !Include::contains(includes, Relation::Teams) {
        projected.teams.clear();
    }
    projected
}
