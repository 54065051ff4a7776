//! CLI commands for rentmap

pub mod dispatch;
pub mod facets;
pub mod groups;
pub mod list;
pub mod marker;
pub mod replay;
pub mod session;
pub mod show;
