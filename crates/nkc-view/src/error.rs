//! View error types.

use thiserror::Error;

use crate::source::SourceError;
use crate::template::RenderError;

/// Errors that abort a page action.
///
/// Single-institution lookups never produce these; their failures become a
/// not-found outcome instead.
#[derive(Debug, Error)]
pub enum ViewError {
    /// A list fetch against the data source failed.
    #[error("data source error: {0}")]
    Source(#[from] SourceError),

    /// The map info template could not be rendered.
    #[error("render error: {0}")]
    Render(#[from] RenderError),
}
