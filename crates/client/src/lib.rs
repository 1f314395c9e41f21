//! Client-side identity handling for the Greenlight web app.
//!
//! [`session::AuthSession`] caches who is logged in, backed by an
//! [`gateway::IdentityGateway`]; [`guard::before_each`] decides whether a
//! navigation may proceed.

pub mod config;
pub mod error;
pub mod gateway;
pub mod guard;
pub mod session;
