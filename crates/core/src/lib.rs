//! Greenlight domain core.
//!
//! Pure domain types and in-memory state with no I/O: the project aggregate
//! and its child collections, the demo catalog, role names and the shared
//! error type used by the database and HTTP layers.

pub mod catalog;
pub mod collection;
pub mod error;
pub mod project;
pub mod roles;
pub mod store;
pub mod types;
