//! Row models and DTOs.
//!
//! Each submodule contains a `FromRow` entity struct matching the database
//! row and, where rows are written, a create DTO.

pub mod document;
pub mod project;
pub mod session;
pub mod timeline_event;
pub mod user;
