//! # nkc-core
//!
//! Core types shared across the institution directory crates.
//!
//! This crate provides:
//! - Entity structs for the institution object graph as fetched from the
//!   remote data source (institutions, addresses, opening hours, teams)
//! - Relation, weekday, and selection-mode enums
//! - The user-facing [`SearchRequest`] input DTO
//! - Cross-cutting error types
//! - Date display helpers for partial dates returned by the data source

pub mod dates;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod search_request;

pub use search_request::SearchRequest;
