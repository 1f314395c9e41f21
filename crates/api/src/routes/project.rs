//! Route definitions for the persisted `/projects` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET /                -> list
/// GET /{id}/timeline   -> timeline
/// GET /{id}/documents  -> documents
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list))
        .route("/{id}/timeline", get(project::timeline))
        .route("/{id}/documents", get(project::documents))
}
