//! Handlers for the persisted `/projects` rows and their children.

use axum::extract::{Path, State};
use axum::Json;
use greenlight_core::types::DbId;
use greenlight_db::models::document::DocumentRow;
use greenlight_db::models::project::ProjectRow;
use greenlight_db::models::timeline_event::TimelineEventRow;
use greenlight_db::repositories::{DocumentRepo, ProjectRepo, TimelineEventRepo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Parse a path segment as a positive project id.
///
/// Taken as a raw string so that `abc`, `0` and `-3` all produce the same
/// 400 instead of the extractor's generic rejection.
pub fn parse_project_id(raw: &str) -> AppResult<DbId> {
    match raw.parse::<DbId>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::BadRequest(
            "Invalid project ID. Must be a positive integer.".into(),
        )),
    }
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectRow>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{id}/timeline
pub async fn timeline(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<TimelineEventRow>>> {
    let project_id = parse_project_id(&raw_id)?;
    let events = TimelineEventRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(events))
}

/// GET /api/projects/{id}/documents
pub async fn documents(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> AppResult<Json<Vec<DocumentRow>>> {
    let project_id = parse_project_id(&raw_id)?;
    let documents = DocumentRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(documents))
}
