//! HTTP-level integration tests for the pitch catalog.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, create_user, get, login, put_json_auth};
use sqlx::PgPool;

fn ids(json: &serde_json::Value) -> Vec<i64> {
    json.as_array()
        .expect("catalog list should be an array")
        .iter()
        .map(|p| p["id"].as_i64().unwrap())
        .collect()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_catalog_lists_published_only(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/catalog").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), vec![1, 2]);
    assert_eq!(json[0]["title"], "The Midnight Runner");
    assert!(json[0]["elevatorPitch"].as_str().is_some());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_catalog_detail_and_missing(pool: PgPool) {
    let app = build_test_app(pool);

    let response = get(&app, "/api/catalog/3").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["title"], "Desert Dreams");
    assert_eq!(json["published"], false);

    let response = get(&app, "/api/catalog/99").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_can_publish(pool: PgPool) {
    create_user(&pool, "admin@example.com", "admin").await;
    let app = build_test_app(pool);
    let token = login(&app, "admin@example.com").await;

    let body = serde_json::json!({ "published": true });
    let response = put_json_auth(&app, "/api/catalog/3/published", body, &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["published"], true);

    let json = body_json(get(&app, "/api/catalog").await).await;
    assert_eq!(ids(&json), vec![1, 2, 3]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_admin_publish_missing_project_is_404(pool: PgPool) {
    create_user(&pool, "admin@example.com", "admin").await;
    let app = build_test_app(pool);
    let token = login(&app, "admin@example.com").await;

    let body = serde_json::json!({ "published": true });
    let response = put_json_auth(&app, "/api/catalog/42/published", body, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_crew_cannot_publish(pool: PgPool) {
    create_user(&pool, "crew@example.com", "crew").await;
    let app = build_test_app(pool);
    let token = login(&app, "crew@example.com").await;

    let body = serde_json::json!({ "published": false });
    let response = put_json_auth(&app, "/api/catalog/1/published", body, &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(get(&app, "/api/catalog").await).await;
    assert_eq!(ids(&json), vec![1, 2]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_publish_requires_session(pool: PgPool) {
    let app = build_test_app(pool);
    let body = serde_json::json!({ "published": true });
    let response = common::send(
        &app,
        axum::http::Method::PUT,
        "/api/catalog/3/published",
        Some(body),
        None,
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
