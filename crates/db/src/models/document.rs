//! Persisted project document row.

use greenlight_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `documents` table: a file uploaded against a project.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentRow {
    pub id: DbId,
    pub project_id: DbId,
    pub uploader_id: DbId,
    pub url: String,
    pub name: String,
    pub created_at: Timestamp,
}

/// DTO for recording an uploaded document.
#[derive(Debug, Clone)]
pub struct CreateDocumentRow {
    pub project_id: DbId,
    pub uploader_id: DbId,
    pub url: String,
    pub name: String,
}
