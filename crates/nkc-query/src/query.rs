//! The query value handed to the data source, and its request-scoped builder.

use nkc_core::enums::Include;
use schemars::JsonSchema;
use serde::Serialize;

/// Page size used when nothing else is configured.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Radius restriction around a center point. Radius is in kilometres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct GeoFilter {
    pub latitude: f64,
    pub longitude: f64,
    pub radius: f64,
}

/// Filters, pagination, relation includes, and sort of one institution fetch.
///
/// Built through [`InstitutionQueryBuilder`]; read-only afterwards. Empty
/// lists and `None` mean "no restriction on this dimension".
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct InstitutionQuery {
    include: Vec<Include>,
    page: u32,
    page_size: u32,
    institutions: Vec<i64>,
    parent_institutions: Vec<i64>,
    institution_types: Vec<i64>,
    categories: Vec<i64>,
    zip_codes: Vec<String>,
    cities: Vec<String>,
    query: Option<String>,
    geo: Option<GeoFilter>,
    sort: Option<String>,
}

impl Default for InstitutionQuery {
    fn default() -> Self {
        Self {
            include: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            institutions: Vec::new(),
            parent_institutions: Vec::new(),
            institution_types: Vec::new(),
            categories: Vec::new(),
            zip_codes: Vec::new(),
            cities: Vec::new(),
            query: None,
            geo: None,
            sort: None,
        }
    }
}

impl InstitutionQuery {
    #[must_use]
    pub fn builder() -> InstitutionQueryBuilder {
        InstitutionQueryBuilder::new()
    }

    #[must_use]
    pub fn include(&self) -> &[Include] {
        &self.include
    }

    /// 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    #[must_use]
    pub const fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Number of records skipped before this page.
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    #[must_use]
    pub fn institutions(&self) -> &[i64] {
        &self.institutions
    }

    #[must_use]
    pub fn parent_institutions(&self) -> &[i64] {
        &self.parent_institutions
    }

    #[must_use]
    pub fn institution_types(&self) -> &[i64] {
        &self.institution_types
    }

    #[must_use]
    pub fn categories(&self) -> &[i64] {
        &self.categories
    }

    #[must_use]
    pub fn zip_codes(&self) -> &[String] {
        &self.zip_codes
    }

    #[must_use]
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    /// Free-text query.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub const fn geo(&self) -> Option<&GeoFilter> {
        self.geo.as_ref()
    }

    #[must_use]
    pub fn sort(&self) -> Option<&str> {
        self.sort.as_deref()
    }
}

/// Request-scoped builder for [`InstitutionQuery`].
///
/// Every setter replaces the previous value of its dimension.
#[derive(Debug, Clone, Default)]
pub struct InstitutionQueryBuilder(InstitutionQuery);

impl InstitutionQueryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(InstitutionQuery::default())
    }

    #[must_use]
    pub fn include(mut self, include: Vec<Include>) -> Self {
        self.0.include = include;
        self
    }

    /// Page numbers below 1 are clamped to 1.
    #[must_use]
    pub fn page(mut self, page: u32) -> Self {
        self.0.page = page.max(1);
        self
    }

    /// Page sizes below 1 are clamped to 1.
    #[must_use]
    pub fn page_size(mut self, page_size: u32) -> Self {
        self.0.page_size = page_size.max(1);
        self
    }

    #[must_use]
    pub fn institutions(mut self, ids: Vec<i64>) -> Self {
        self.0.institutions = ids;
        self
    }

    #[must_use]
    pub fn parent_institutions(mut self, ids: Vec<i64>) -> Self {
        self.0.parent_institutions = ids;
        self
    }

    #[must_use]
    pub fn institution_types(mut self, ids: Vec<i64>) -> Self {
        self.0.institution_types = ids;
        self
    }

    #[must_use]
    pub fn categories(mut self, ids: Vec<i64>) -> Self {
        self.0.categories = ids;
        self
    }

    #[must_use]
    pub fn zip_codes(mut self, zip_codes: Vec<String>) -> Self {
        self.0.zip_codes = zip_codes;
        self
    }

    #[must_use]
    pub fn cities(mut self, cities: Vec<String>) -> Self {
        self.0.cities = cities;
        self
    }

    #[must_use]
    pub fn query(mut self, text: impl Into<String>) -> Self {
        self.0.query = Some(text.into());
        self
    }

    #[must_use]
    pub const fn geo(mut self, geo: GeoFilter) -> Self {
        self.0.geo = Some(geo);
        self
    }

    #[must_use]
    pub fn sort(mut self, sort: impl Into<String>) -> Self {
        self.0.sort = Some(sort.into());
        self
    }

    /// Category restriction accumulated so far.
    #[must_use]
    pub fn current_categories(&self) -> &[i64] {
        &self.0.categories
    }

    #[must_use]
    pub fn build(self) -> InstitutionQuery {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nkc_core::enums::Relation;

    #[test]
    fn default_query_is_unrestricted_first_page() {
        let query = InstitutionQuery::default();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), DEFAULT_PAGE_SIZE);
        assert_eq!(query.offset(), 0);
        assert!(query.include().is_empty());
        assert!(query.categories().is_empty());
        assert!(query.query().is_none());
        assert!(query.geo().is_none());
        assert!(query.sort().is_none());
    }

    #[test]
    fn builder_clamps_page_and_size() {
        let query = InstitutionQuery::builder().page(0).page_size(0).build();
        assert_eq!(query.page(), 1);
        assert_eq!(query.page_size(), 1);
    }

    #[test]
    fn offset_follows_page() {
        let query = InstitutionQuery::builder().page(3).page_size(20).build();
        assert_eq!(query.offset(), 40);
    }

    #[test]
    fn setters_replace_previous_values() {
        let builder = InstitutionQuery::builder()
            .include(vec![Include::leaf(Relation::Address)])
            .categories(vec![5, 7]);
        assert_eq!(builder.current_categories(), &[5, 7]);

        let query = builder.categories(vec![5]).build();
        assert_eq!(query.categories(), &[5]);
        assert_eq!(query.include(), &[Include::leaf(Relation::Address)]);
    }
}
