//! Handlers for the project draft under edit.
//!
//! Every route requires a logged-in user. Child-collection routes are generic
//! over [`DraftResource`], which maps each record kind onto its store
//! operations; a missing record id is reported as 404 and a collection with
//! no ids left as 409.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use greenlight_core::collection::ChildRecord;
use greenlight_core::project::{
    Actor, Location, Project, ProjectPatch, Sponsor, TeamMember, TimelineEvent,
};
use greenlight_core::store::ProjectStore;
use greenlight_core::types::RecordId;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /api/draft/files/{field}`.
#[derive(Debug, Deserialize)]
pub struct SetFileRequest {
    pub url: String,
}

/// Request body for `PUT /api/draft/elevator-pitch`.
#[derive(Debug, Deserialize)]
pub struct SetTextRequest {
    pub text: String,
}

// ---------------------------------------------------------------------------
// Draft root
// ---------------------------------------------------------------------------

/// GET /api/draft
pub async fn get(State(state): State<AppState>, _auth: RequireAuth) -> Json<Project> {
    Json(state.store.read().await.current().clone())
}

/// PATCH /api/draft
pub async fn update(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Json(patch): Json<ProjectPatch>,
) -> Json<Project> {
    let mut store = state.store.write().await;
    Json(store.update_project(patch).clone())
}

/// PUT /api/draft/files/{field}
///
/// `field` must be `pitchDeck`, `script`, `treatment` or `trailer`; any other
/// name leaves the draft unchanged.
pub async fn set_file(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Path(field): Path<String>,
    Json(input): Json<SetFileRequest>,
) -> Json<Project> {
    let mut store = state.store.write().await;
    if !store.set_asset_file(&field, input.url) {
        tracing::debug!(%field, "Ignoring file upload for non-asset field");
    }
    Json(store.current().clone())
}

/// PUT /api/draft/elevator-pitch
pub async fn set_elevator_pitch(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Json(input): Json<SetTextRequest>,
) -> Json<Project> {
    let mut store = state.store.write().await;
    store.set_elevator_pitch(input.text);
    Json(store.current().clone())
}

/// POST /api/draft/reset
pub async fn reset(State(state): State<AppState>, RequireAuth(user): RequireAuth) -> Json<Project> {
    let mut store = state.store.write().await;
    store.reset_draft();
    tracing::info!(user_id = user.user_id, "Draft reset to defaults");
    Json(store.current().clone())
}

// ---------------------------------------------------------------------------
// Child collections
// ---------------------------------------------------------------------------

/// A child record kind reachable under `/api/draft/{collection}`.
pub trait DraftResource: ChildRecord + Clone + Serialize + Send + 'static {
    /// Entity name used in 404 messages.
    const ENTITY: &'static str;

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self>;

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self>;

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool;
}

impl DraftResource for TimelineEvent {
    const ENTITY: &'static str = "TimelineEvent";

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self> {
        store.add_timeline_event(new)
    }

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self> {
        store.update_timeline_event(id, patch)
    }

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool {
        store.delete_timeline_event(id)
    }
}

impl DraftResource for Actor {
    const ENTITY: &'static str = "Actor";

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self> {
        store.add_actor(new)
    }

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self> {
        store.update_actor(id, patch)
    }

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool {
        store.delete_actor(id)
    }
}

impl DraftResource for Location {
    const ENTITY: &'static str = "Location";

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self> {
        store.add_location(new)
    }

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self> {
        store.update_location(id, patch)
    }

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool {
        store.delete_location(id)
    }
}

impl DraftResource for TeamMember {
    const ENTITY: &'static str = "TeamMember";

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self> {
        store.add_team_member(new)
    }

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self> {
        store.update_team_member(id, patch)
    }

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool {
        store.delete_team_member(id)
    }
}

impl DraftResource for Sponsor {
    const ENTITY: &'static str = "Sponsor";

    fn add(store: &mut ProjectStore, new: Self::New) -> Option<&Self> {
        store.add_sponsor(new)
    }

    fn update(store: &mut ProjectStore, id: RecordId, patch: Self::Patch) -> Option<&Self> {
        store.update_sponsor(id, patch)
    }

    fn delete(store: &mut ProjectStore, id: RecordId) -> bool {
        store.delete_sponsor(id)
    }
}

/// POST /api/draft/{collection}
pub async fn add_record<R>(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Json(input): Json<R::New>,
) -> AppResult<(StatusCode, Json<R>)>
where
    R: DraftResource,
    R::New: DeserializeOwned + Send + 'static,
{
    let mut store = state.store.write().await;
    let record = R::add(&mut store, input).cloned().ok_or_else(|| {
        AppError::conflict(format!("No {} ids left in the draft", R::ENTITY))
    })?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// PATCH /api/draft/{collection}/{id}
pub async fn update_record<R>(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Path(id): Path<RecordId>,
    Json(patch): Json<R::Patch>,
) -> AppResult<Json<R>>
where
    R: DraftResource,
    R::Patch: DeserializeOwned + Send + 'static,
{
    let mut store = state.store.write().await;
    let record = R::update(&mut store, id, patch)
        .cloned()
        .ok_or(AppError::not_found(R::ENTITY, id))?;
    Ok(Json(record))
}

/// DELETE /api/draft/{collection}/{id}
pub async fn delete_record<R>(
    State(state): State<AppState>,
    _auth: RequireAuth,
    Path(id): Path<RecordId>,
) -> AppResult<StatusCode>
where
    R: DraftResource,
{
    let mut store = state.store.write().await;
    if R::delete(&mut store, id) {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found(R::ENTITY, id))
    }
}
