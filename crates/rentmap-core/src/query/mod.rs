//! Attribute filtering over the record set

pub mod filter;

pub use filter::{apply_attribute_filters, FilterCriteria, FilterInput, GenderCriterion, Range};
