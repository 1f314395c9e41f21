//! Identity and session primitives.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`jwt`] -- Session token generation/validation and `jti` hashing.
//! - [`cookie`] -- The `session` cookie and token extraction from requests.
//! - [`bootstrap`] -- Demo account creation at startup.

pub mod bootstrap;
pub mod cookie;
pub mod jwt;
pub mod password;
