//! # nkc-query
//!
//! Composes the [`InstitutionQuery`] sent to the institution data source.
//!
//! A listing query is assembled in a fixed order:
//! includes → pagination → base collection → institution type → geo radius →
//! user search input → sort. Configuration defines the allowed universe; user
//! input only narrows within it (see [`user_filters`]).
//!
//! The crate never talks to the data source. It only produces query values.

pub mod builder;
pub mod filter_config;
pub mod includes;
pub mod query;
pub mod user_filters;

pub use builder::{ListQuery, build_list_query, child_query};
pub use filter_config::FilterConfiguration;
pub use query::{GeoFilter, InstitutionQuery, InstitutionQueryBuilder};
