pub mod auth;
pub mod catalog;
pub mod draft;
pub mod project;
