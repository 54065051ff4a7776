//! Output formatting for the list command

pub(crate) mod human;
mod json;
mod records;

pub use human::output_human;
pub use json::output_json;
pub use records::output_records;
