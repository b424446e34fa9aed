//! Category taxonomy boundary.

use nkc_core::entities::Category;

/// Read access to the page's category store.
pub trait CategoryStore {
    fn find_by_id(&self, id: i64) -> Option<Category>;
}
