pub mod dispatch;
pub mod list;
pub mod redirect;
pub mod search;
pub mod search_form;
pub mod show;
