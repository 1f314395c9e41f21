//! Well-known role name constants.
//!
//! Users are either `admin` or `crew`, enforced by the `CHECK` constraint on
//! `users.role` in the initial migration. Only `admin` grants extra rights.

pub const ROLE_ADMIN: &str = "admin";
