//! Relation includes for the fetches the directory performs.

use nkc_core::enums::{Include, Relation};

/// Relations a list row needs: address and type.
#[must_use]
pub fn list_includes() -> Vec<Include> {
    vec![
        Include::leaf(Relation::Address),
        Include::leaf(Relation::InstitutionType),
    ]
}

/// Relations of the detail view, including teams with their people.
#[must_use]
pub fn detail_includes() -> Vec<Include> {
    vec![
        Include::leaf(Relation::Address),
        Include::leaf(Relation::InstitutionType),
        Include::leaf(Relation::MapChildren),
        Include::leaf(Relation::ParentInstitutions),
        Include::with(
            Relation::Teams,
            vec![
                Include::with(Relation::Functions, vec![Include::leaf(Relation::Person)]),
                Include::leaf(Relation::FunctionType),
            ],
        ),
    ]
}
