//! Cross-cutting error types.
//!
//! Collaborator-specific errors (`SourceError`, `RenderError`) live in
//! `nkc-view`; configuration errors live in `nkc-config`.

use thiserror::Error;

/// Errors that can be raised while interpreting domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A value could not be parsed into the expected domain type.
    #[error("Invalid {kind}: {value}")]
    InvalidValue { kind: &'static str, value: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),
}
