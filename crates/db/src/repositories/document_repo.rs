//! Repository for the `documents` table.

use greenlight_core::types::DbId;
use sqlx::PgPool;

use crate::models::document::{CreateDocumentRow, DocumentRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, uploader_id, url, name, created_at";

/// Provides project-scoped access to uploaded documents.
pub struct DocumentRepo;

impl DocumentRepo {
    /// Record an uploaded document, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateDocumentRow,
    ) -> Result<DocumentRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO documents (project_id, uploader_id, url, name)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, DocumentRow>(&query)
            .bind(input.project_id)
            .bind(input.uploader_id)
            .bind(&input.url)
            .bind(&input.name)
            .fetch_one(pool)
            .await
    }

    /// List documents uploaded against a project, oldest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DocumentRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM documents WHERE project_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, DocumentRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
