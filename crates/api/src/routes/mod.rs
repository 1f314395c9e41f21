pub mod auth;
pub mod catalog;
pub mod draft;
pub mod health;
pub mod project;

use axum::http::StatusCode;
use axum::Json;
use axum::Router;
use serde_json::{json, Value};

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /register                          disabled registration (403)
/// /login                             login (public)
/// /logout                            logout
/// /me                                current identity (requires auth)
///
/// /catalog                           published pitches
/// /catalog/{id}                      pitch detail
/// /catalog/{id}/published            toggle publication (admin only)
///
/// /draft                             get, patch (requires auth)
/// /draft/files/{field}               set asset reference
/// /draft/elevator-pitch              set elevator pitch
/// /draft/reset                       reset to defaults
/// /draft/{collection}                add child record
/// /draft/{collection}/{id}           update, delete child record
///
/// /projects                          persisted project rows
/// /projects/{id}/timeline            persisted timeline events
/// /projects/{id}/documents           persisted documents
/// ```
///
/// Any other `/api` path answers 404 JSON rather than the client app.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .nest("/catalog", catalog::router())
        .nest("/draft", draft::router())
        .nest("/projects", project::router())
        .fallback(api_not_found)
}

async fn api_not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "API route not found" })),
    )
}
