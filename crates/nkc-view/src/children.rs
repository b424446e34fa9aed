//! Grouping of child institutions for the detail page.

use std::collections::BTreeMap;

use nkc_core::entities::Institution;

/// Children keyed by institution type name, keys in ascending order.
pub type GroupedChildren = BTreeMap<String, Vec<Institution>>;

/// Group `children` by type name, keeping fetch order inside each group.
///
/// Children without a type land under `fallback_label`.
#[must_use]
pub fn group_children(children: Vec<Institution>, fallback_label: &str) -> GroupedChildren {
    let mut groups = GroupedChildren::new();
    for child in children {
        let key = child.type_name().unwrap_or(fallback_label).to_string();
        groups.entry(key).or_default().push(child);
    }
    groups
}
