//! Persisted project row.
//!
//! This is the server-side record; the richer pitch aggregate edited by the
//! client lives in `greenlight_core::project`.

use greenlight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRow {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub pitch_deck_url: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new project row.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateProjectRow {
    pub title: String,
    pub description: Option<String>,
    pub pitch_deck_url: Option<String>,
}
