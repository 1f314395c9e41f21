//! Handlers for the pitch catalog.

use axum::extract::{Path, State};
use axum::Json;
use greenlight_core::project::Project;
use greenlight_core::types::DbId;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::state::AppState;

/// Request body for `PUT /api/catalog/{id}/published`.
#[derive(Debug, Deserialize)]
pub struct SetPublishedRequest {
    pub published: bool,
}

/// GET /api/catalog
///
/// Published pitches in catalog order.
pub async fn list_published(State(state): State<AppState>) -> Json<Vec<Project>> {
    let store = state.store.read().await;
    Json(store.published_projects().into_iter().cloned().collect())
}

/// GET /api/catalog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let store = state.store.read().await;
    let project = store
        .project_by_id(id)
        .cloned()
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}

/// PUT /api/catalog/{id}/published
pub async fn set_published(
    State(state): State<AppState>,
    RequireAdmin(user): RequireAdmin,
    Path(id): Path<DbId>,
    Json(input): Json<SetPublishedRequest>,
) -> AppResult<Json<Project>> {
    let mut store = state.store.write().await;
    if !store.set_project_published(id, input.published) {
        return Err(AppError::not_found("Project", id));
    }
    tracing::info!(
        project_id = id,
        published = input.published,
        user_id = user.user_id,
        "Catalog entry publication changed"
    );

    let project = store
        .project_by_id(id)
        .cloned()
        .ok_or(AppError::not_found("Project", id))?;
    Ok(Json(project))
}
