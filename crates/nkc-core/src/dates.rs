//! Display helpers for partial dates.
//!
//! The data source returns incomplete dates (`2024-05`, `2024-05-01`) as
//! plain strings instead of full timestamps, so they cannot be parsed into a
//! `chrono` date. They are shown day-first with dots instead.

/// Reverse the dash-separated segments and join them with dots.
///
/// `"2024-05-01"` becomes `"01.05.2024"`, `"2024-05"` becomes `"05.2024"`.
#[must_use]
pub fn display_date(date: &str) -> String {
    date.split('-').rev().collect::<Vec<_>>().join(".")
}
