mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get};
use sqlx::PgPool;

#[sqlx::test(migrations = "../db/migrations")]
async fn test_health_reports_db_status(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_unknown_api_route_is_json_404(pool: PgPool) {
    let app = build_test_app(pool);
    let response = get(&app, "/api/does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["error"], "API route not found");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_client_route_without_build_is_404(pool: PgPool) {
    let app = build_test_app(pool);
    // The test config points at a client directory that does not exist, so
    // the SPA fallback has no index.html to serve.
    let response = get(&app, "/dashboard").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
