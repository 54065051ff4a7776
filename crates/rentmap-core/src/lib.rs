//! Rentmap Core Library
//!
//! Core domain logic for the rentmap listing viewer: record loading,
//! attribute/search/viewport filtering, address grouping and the
//! list/map selection synchronizer.

pub mod app;
pub mod config;
pub mod error;
pub mod format;
pub mod group;
pub mod logging;
pub mod provider;
pub mod query;
pub mod record;
pub mod records;
pub mod render;
pub mod search;
pub mod store;
pub mod sync;
pub mod text;
pub mod viewport;
