//! Integration tests for the persistence gateway.
//!
//! Exercises the repository layer against a real database:
//! - User insert and email lookup, unique email constraint
//! - Project and project-scoped timeline/document listing
//! - Foreign key enforcement on child rows
//! - Session create, lookup, revoke and expired-row cleanup

use chrono::{Duration, Utc};
use greenlight_db::models::document::CreateDocumentRow;
use greenlight_db::models::project::CreateProjectRow;
use greenlight_db::models::session::CreateSession;
use greenlight_db::models::timeline_event::CreateTimelineEventRow;
use greenlight_db::models::user::{CreateUser, User};
use greenlight_db::repositories::{
    DocumentRepo, ProjectRepo, SessionRepo, TimelineEventRepo, UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: "not-a-real-hash".to_string(),
            role: "crew".to_string(),
        },
    )
    .await
    .expect("user insert should succeed")
}

fn new_project(title: &str) -> CreateProjectRow {
    CreateProjectRow {
        title: title.to_string(),
        description: None,
        pitch_deck_url: None,
    }
}

fn new_event(title: &str, days_from_now: i64) -> CreateTimelineEventRow {
    CreateTimelineEventRow {
        title: title.to_string(),
        start_date: Utc::now() + Duration::days(days_from_now),
        end_date: None,
        description: None,
    }
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_user_lookup_by_email(pool: PgPool) {
    let created = new_user(&pool, "crew@example.com").await;

    let found = UserRepo::find_by_email(&pool, "crew@example.com")
        .await
        .unwrap()
        .expect("user should exist");
    assert_eq!(found.id, created.id);
    assert_eq!(found.role, "crew");

    let missing = UserRepo::find_by_email(&pool, "nobody@example.com").await.unwrap();
    assert!(missing.is_none());
}

#[sqlx::test(migrations = "./migrations")]
async fn test_duplicate_email_is_rejected(pool: PgPool) {
    new_user(&pool, "dup@example.com").await;

    let result = UserRepo::create(
        &pool,
        &CreateUser {
            email: "dup@example.com".to_string(),
            password_hash: "x".to_string(),
            role: "crew".to_string(),
        },
    )
    .await;

    let err = result.expect_err("duplicate email must fail");
    let db_err = err.as_database_error().expect("should be a database error");
    assert_eq!(db_err.constraint(), Some("uq_users_email"));
}

// ---------------------------------------------------------------------------
// Projects and children
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_timeline_is_scoped_to_project(pool: PgPool) {
    let a = ProjectRepo::create(&pool, &new_project("A")).await.unwrap();
    let b = ProjectRepo::create(&pool, &new_project("B")).await.unwrap();

    TimelineEventRepo::create(&pool, a.id, &new_event("Wrap", 10)).await.unwrap();
    TimelineEventRepo::create(&pool, a.id, &new_event("Kickoff", 1)).await.unwrap();
    TimelineEventRepo::create(&pool, b.id, &new_event("Other", 2)).await.unwrap();

    let events = TimelineEventRepo::list_by_project(&pool, a.id).await.unwrap();
    let titles: Vec<&str> = events.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["Kickoff", "Wrap"]);

    let all = ProjectRepo::list(&pool).await.unwrap();
    assert_eq!(all.len(), 2);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_timeline_event_requires_existing_project(pool: PgPool) {
    let result = TimelineEventRepo::create(&pool, 999_999, &new_event("Orphan", 1)).await;
    assert!(result.is_err(), "foreign key must reject unknown project");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_documents_listed_by_project(pool: PgPool) {
    let user = new_user(&pool, "uploader@example.com").await;
    let project = ProjectRepo::create(&pool, &new_project("Docs")).await.unwrap();

    DocumentRepo::create(
        &pool,
        &CreateDocumentRow {
            project_id: project.id,
            uploader_id: user.id,
            url: "https://files.example/script.pdf".to_string(),
            name: "Script".to_string(),
        },
    )
    .await
    .unwrap();

    let docs = DocumentRepo::list_by_project(&pool, project.id).await.unwrap();
    assert_eq!(docs.len(), 1);
    assert_eq!(docs[0].uploader_id, user.id);
    assert_eq!(docs[0].name, "Script");
}

// ---------------------------------------------------------------------------
// Sessions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "./migrations")]
async fn test_session_revoke_hides_it_from_lookup(pool: PgPool) {
    let user = new_user(&pool, "session@example.com").await;
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token_hash: "abc123".to_string(),
            expires_at: Utc::now() + Duration::hours(1),
        },
    )
    .await
    .unwrap();

    let active = SessionRepo::find_active_by_token_hash(&pool, "abc123").await.unwrap();
    assert!(active.is_some());

    assert!(SessionRepo::revoke_by_token_hash(&pool, "abc123").await.unwrap());
    assert!(!SessionRepo::revoke_by_token_hash(&pool, "abc123").await.unwrap());

    let active = SessionRepo::find_active_by_token_hash(&pool, "abc123").await.unwrap();
    assert!(active.is_none());

    let removed = SessionRepo::cleanup_expired(&pool).await.unwrap();
    assert_eq!(removed, 1);
}

#[sqlx::test(migrations = "./migrations")]
async fn test_expired_session_is_not_active(pool: PgPool) {
    let user = new_user(&pool, "expired@example.com").await;
    SessionRepo::create(
        &pool,
        &CreateSession {
            user_id: user.id,
            token_hash: "old".to_string(),
            expires_at: Utc::now() - Duration::minutes(5),
        },
    )
    .await
    .unwrap();

    let active = SessionRepo::find_active_by_token_hash(&pool, "old").await.unwrap();
    assert!(active.is_none());
    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 1);
    assert_eq!(SessionRepo::cleanup_expired(&pool).await.unwrap(), 0);
}
