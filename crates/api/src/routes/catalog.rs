//! Route definitions for the `/catalog` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/catalog`.
///
/// ```text
/// GET /                -> list_published
/// GET /{id}            -> get_by_id
/// PUT /{id}/published  -> set_published (admin only)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list_published))
        .route("/{id}", get(catalog::get_by_id))
        .route("/{id}/published", put(catalog::set_published))
}
