//! Institution data source boundary.

use nkc_core::entities::Institution;
use nkc_core::enums::Include;
use nkc_query::InstitutionQuery;
use thiserror::Error;

/// Failures reported by a data source implementation.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The requested record does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The source could not be reached.
    #[error("transport error: {0}")]
    Transport(String),

    /// The source answered with something that is not an institution.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// Remote institution data source.
pub trait InstitutionSource {
    /// Fetch one page of institutions matching `query`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the source fails.
    fn fetch_list(&self, query: &InstitutionQuery) -> Result<Vec<Institution>, SourceError>;

    /// Fetch a single institution by id.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::NotFound`] for unknown ids, other variants when
    /// the source fails.
    fn fetch_by_id(&self, id: i64, includes: &[Include]) -> Result<Institution, SourceError>;

    /// Resolve an institution from a url or slug reference.
    ///
    /// # Errors
    ///
    /// Same as [`InstitutionSource::fetch_by_id`].
    fn resolve_by_slug(&self, slug: &str, includes: &[Include])
    -> Result<Institution, SourceError>;
}

/// Outcome of a single-institution lookup.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Box<Institution>),
    NotFound,
}

impl Lookup {
    /// Collapse any source failure into [`Lookup::NotFound`].
    ///
    /// Missing records and unreachable sources are not told apart here.
    #[must_use]
    pub fn from_result(result: Result<Institution, SourceError>, reference: &str) -> Self {
        match result {
            Ok(institution) => Self::Found(Box::new(institution)),
            Err(error) => {
                tracing::debug!(reference, %error, "institution lookup failed");
                Self::NotFound
            }
        }
    }

    #[must_use]
    pub fn into_option(self) -> Option<Institution> {
        match self {
            Self::Found(institution) => Some(*institution),
            Self::NotFound => None,
        }
    }
}
