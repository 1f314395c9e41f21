//! Persisted timeline event row.

use greenlight_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `timeline_events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineEventRow {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a timeline event under a project.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTimelineEventRow {
    pub title: String,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    pub description: Option<String>,
}
