//! Overlay of user search input onto a configuration-driven query.
//!
//! Input that is too short or otherwise unusable is ignored rather than
//! rejected: the listing then simply shows the configured universe.

use nkc_core::SearchRequest;

use crate::query::InstitutionQueryBuilder;

/// Free-text and city input must be longer than this many characters.
pub const MIN_INPUT_CHARS: usize = 2;

/// Interpretation of the combined city-or-zip search field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Locality {
    ZipCodes(Vec<String>),
    Cities(Vec<String>),
}

/// Trimmed free text if it is long enough to search for.
#[must_use]
pub fn free_text(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (trimmed.chars().count() > MIN_INPUT_CHARS).then_some(trimmed)
}

/// Parse the city-or-zip field.
///
/// An all-digit value is a single zip code. Anything else is a comma
/// separated list of city names; segments are trimmed and empty ones dropped.
#[must_use]
pub fn parse_locality(raw: &str) -> Option<Locality> {
    let trimmed = raw.trim();
    if trimmed.chars().count() <= MIN_INPUT_CHARS {
        return None;
    }

    if trimmed.chars().all(|c| c.is_ascii_digit()) {
        return Some(Locality::ZipCodes(vec![trimmed.to_string()]));
    }

    let cities: Vec<String> = trimmed
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(String::from)
        .collect();

    (!cities.is_empty()).then_some(Locality::Cities(cities))
}

/// Apply the user's search input on top of the configured filters.
#[must_use]
pub fn apply_user_filters(
    mut builder: InstitutionQueryBuilder,
    request: &SearchRequest,
) -> InstitutionQueryBuilder {
    if let Some(text) = free_text(&request.search) {
        builder = builder.query(text);
    } else if !request.search.is_empty() {
        tracing::debug!(search = %request.search, "search text too short; ignored");
    }

    match parse_locality(&request.city) {
        Some(Locality::ZipCodes(zip_codes)) => builder = builder.zip_codes(zip_codes),
        Some(Locality::Cities(cities)) => builder = builder.cities(cities),
        None if !request.city.is_empty() => {
            tracing::debug!(city = %request.city, "city filter too short; ignored");
        }
        None => {}
    }

    apply_category(builder, request.category)
}

/// A configured category restriction is the allowed universe: the user's
/// category narrows it to one entry if it is a member and is dropped otherwise.
fn apply_category(builder: InstitutionQueryBuilder, category: i64) -> InstitutionQueryBuilder {
    if category <= 0 {
        return builder;
    }

    let restricted = builder.current_categories();
    if restricted.is_empty() || restricted.contains(&category) {
        builder.categories(vec![category])
    } else {
        tracing::debug!(
            category,
            allowed = ?restricted,
            "category outside configured restriction; ignored"
        );
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::InstitutionQuery;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("a")]
    #[case("ab")]
    #[case("  ab  ")]
    fn short_free_text_is_ignored(#[case] raw: &str) {
        assert_eq!(free_text(raw), None);
    }

    #[test]
    fn free_text_is_trimmed() {
        assert_eq!(free_text("  kita "), Some("kita"));
        assert_eq!(free_text("abc"), Some("abc"));
    }

    #[test]
    fn free_text_counts_characters_not_bytes() {
        // "Öl" is two characters but four bytes.
        assert_eq!(free_text("Öl"), None);
        assert_eq!(free_text("Öle"), Some("Öle"));
    }

    #[rstest]
    #[case("12345", Locality::ZipCodes(vec!["12345".into()]))]
    #[case(" 24103 ", Locality::ZipCodes(vec!["24103".into()]))]
    #[case("Berlin, Hamburg", Locality::Cities(vec!["Berlin".into(), "Hamburg".into()]))]
    #[case("Kiel,, Lübeck ,", Locality::Cities(vec!["Kiel".into(), "Lübeck".into()]))]
    #[case("241a3", Locality::Cities(vec!["241a3".into()]))]
    fn locality_is_zip_or_city_list(#[case] raw: &str, #[case] expected: Locality) {
        assert_eq!(parse_locality(raw), Some(expected));
    }

    #[rstest]
    #[case("")]
    #[case("Ki")]
    #[case("12")]
    #[case(" , ,")]
    fn unusable_locality_is_ignored(#[case] raw: &str) {
        assert_eq!(parse_locality(raw), None);
    }

    #[test]
    fn category_narrows_configured_restriction() {
        let builder = InstitutionQuery::builder().categories(vec![5, 7]);
        let query = apply_user_filters(builder, &SearchRequest::new("", "", 5)).build();
        assert_eq!(query.categories(), &[5]);
    }

    #[test]
    fn category_outside_restriction_is_dropped() {
        let builder = InstitutionQuery::builder().categories(vec![5, 7]);
        let query = apply_user_filters(builder, &SearchRequest::new("", "", 9)).build();
        assert_eq!(query.categories(), &[5, 7]);
    }

    #[test]
    fn category_without_restriction_applies_directly() {
        let query =
            apply_user_filters(InstitutionQuery::builder(), &SearchRequest::new("", "", 9)).build();
        assert_eq!(query.categories(), &[9]);
    }

    #[rstest]
    #[case(0)]
    #[case(-4)]
    fn unset_category_leaves_query_alone(#[case] category: i64) {
        let builder = InstitutionQuery::builder().categories(vec![5, 7]);
        let query = apply_user_filters(builder, &SearchRequest::new("", "", category)).build();
        assert_eq!(query.categories(), &[5, 7]);
    }

    #[test]
    fn zip_input_does_not_set_cities() {
        let query = apply_user_filters(
            InstitutionQuery::builder(),
            &SearchRequest::new("", "12345", 0),
        )
        .build();
        assert_eq!(query.zip_codes(), &["12345".to_string()]);
        assert!(query.cities().is_empty());
    }
}
