//! Repository for the `timeline_events` table.

use greenlight_core::types::DbId;
use sqlx::PgPool;

use crate::models::timeline_event::{CreateTimelineEventRow, TimelineEventRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, start_date, end_date, description, created_at";

/// Provides project-scoped access to timeline events.
pub struct TimelineEventRepo;

impl TimelineEventRepo {
    /// Insert a timeline event for `project_id`, returning the created row.
    ///
    /// Fails with a foreign-key violation when the project does not exist.
    pub async fn create(
        pool: &PgPool,
        project_id: DbId,
        input: &CreateTimelineEventRow,
    ) -> Result<TimelineEventRow, sqlx::Error> {
        let query = format!(
            "INSERT INTO timeline_events (project_id, title, start_date, end_date, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimelineEventRow>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// List all events for a project, earliest start first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<TimelineEventRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM timeline_events
             WHERE project_id = $1
             ORDER BY start_date, id"
        );
        sqlx::query_as::<_, TimelineEventRow>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
