//! Repository for the `projects` table.

use sqlx::PgPool;

use crate::models::project::{CreateProjectRow, ProjectRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, pitch_deck_url, created_at";

/// Provides read and insert operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProjectRow,
    ) -> Result<ProjectRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, description, pitch_deck_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectRow>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.pitch_deck_url)
            .fetch_one(pool)
            .await
    }

    /// List all projects in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<ProjectRow>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY id");
        sqlx::query_as::<_, ProjectRow>(&query).fetch_all(pool).await
    }
}
