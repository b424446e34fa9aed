//! # nkc-view
//!
//! Turns fetched institutions into view models and drives the directory's
//! page actions.
//!
//! - [`children`]: child institutions grouped by type name
//! - [`markers`]: map markers with visibility rules and icon fallback
//! - [`opening_hours`]: opening hours padded into a rectangular grid
//! - [`filter_values`]: city and category choices for the search form
//! - [`controller`]: list, search, show, and redirect actions
//!
//! External systems (institution data source, category store, template
//! engine, asset files) are reached only through the traits in [`source`],
//! [`category`], [`template`], and [`assets`]. [`memory`] provides in-memory
//! implementations for offline use.

pub mod assets;
pub mod category;
pub mod children;
pub mod controller;
mod error;
pub mod filter_values;
pub mod markers;
pub mod memory;
pub mod opening_hours;
pub mod responses;
pub mod routing;
pub mod source;
pub mod template;

pub use controller::InstitutionController;
pub use error::ViewError;
