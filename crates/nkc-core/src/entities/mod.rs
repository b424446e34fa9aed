//! Entity structs for the institution object graph.
//!
//! These mirror what the remote institution data source returns. The
//! directory core never mutates them; all derived views are built from
//! borrowed entities. All structs derive `Serialize`, `Deserialize`, and
//! `JsonSchema` so they can be echoed into rendered views.

mod address;
mod category;
mod institution;
mod opening_hours;
mod team;

pub use address::Address;
pub use category::Category;
pub use institution::{Institution, InstitutionType};
pub use opening_hours::OpeningHours;
pub use team::{FunctionType, Person, PersonFunction, Team};
