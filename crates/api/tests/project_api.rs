//! HTTP-level integration tests for the persisted project reads.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{body_json, build_test_app, create_user, get};
use greenlight_db::models::document::CreateDocumentRow;
use greenlight_db::models::project::CreateProjectRow;
use greenlight_db::models::timeline_event::CreateTimelineEventRow;
use greenlight_db::repositories::{DocumentRepo, ProjectRepo, TimelineEventRepo};
use sqlx::PgPool;

async fn seed_project(pool: &PgPool, title: &str) -> i64 {
    ProjectRepo::create(
        pool,
        &CreateProjectRow {
            title: title.to_string(),
            description: Some("Logline".to_string()),
            pitch_deck_url: None,
        },
    )
    .await
    .unwrap()
    .id
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_projects(pool: PgPool) {
    seed_project(&pool, "First").await;
    seed_project(&pool, "Second").await;
    let app = build_test_app(pool);

    let response = get(&app, "/api/projects").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_timeline_for_project_ordered_by_start(pool: PgPool) {
    let id = seed_project(&pool, "Timeline").await;
    for (title, days) in [("Wrap", 30), ("Kickoff", 1)] {
        TimelineEventRepo::create(
            &pool,
            id,
            &CreateTimelineEventRow {
                title: title.to_string(),
                start_date: Utc::now() + Duration::days(days),
                end_date: None,
                description: None,
            },
        )
        .await
        .unwrap();
    }
    let app = build_test_app(pool);

    let response = get(&app, &format!("/api/projects/{id}/timeline")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json[0]["title"], "Kickoff");
    assert_eq!(json[1]["title"], "Wrap");
    assert_eq!(json[0]["projectId"], id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_timeline_for_unknown_project_is_empty(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/projects/777/timeline").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_documents_for_project(pool: PgPool) {
    let user = create_user(&pool, "crew@example.com", "crew").await;
    let id = seed_project(&pool, "Docs").await;
    DocumentRepo::create(
        &pool,
        &CreateDocumentRow {
            project_id: id,
            uploader_id: user.id,
            url: "https://files.example/treatment.pdf".to_string(),
            name: "Treatment".to_string(),
        },
    )
    .await
    .unwrap();
    let app = build_test_app(pool);

    let response = get(&app, &format!("/api/projects/{id}/documents")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["name"], "Treatment");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_invalid_project_id_is_400(pool: PgPool) {
    let app = build_test_app(pool);

    for path in [
        "/api/projects/abc/timeline",
        "/api/projects/0/timeline",
        "/api/projects/-2/documents",
    ] {
        let response = get(&app, path).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{path}");
        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            "Invalid project ID. Must be a positive integer."
        );
    }
}
