//! Integration tests for the health check endpoint, reference lists and
//! general HTTP behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use serde_json::json;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn health_check_returns_ok_with_json(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["db_healthy"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn unknown_route_returns_404(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn response_contains_x_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);
    let response = get(app, "/health").await;

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // UUID string, 36 chars with hyphens.
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_allows_configured_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .unwrap(),
        "http://localhost:3000"
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_preflight_accepts_request_id_header(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/projects/1/status")
        .header("Origin", "http://localhost:3000")
        .header("Access-Control-Request-Method", "PATCH")
        .header("Access-Control-Request-Headers", "content-type,x-request-id")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let allowed = response
        .headers()
        .get("access-control-allow-headers")
        .unwrap()
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    assert!(allowed.contains("x-request-id"), "allowed headers: {allowed}");
    assert!(allowed.contains("content-type"), "allowed headers: {allowed}");
    assert!(!allowed.contains("authorization"), "allowed headers: {allowed}");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cors_rejects_unknown_origin(pool: PgPool) {
    let app = common::build_test_app(pool);

    let request = Request::builder()
        .method(Method::GET)
        .uri("/health")
        .header("Origin", "http://evil.test")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert!(response
        .headers()
        .get("access-control-allow-origin")
        .is_none());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reference_statuses_lists_codes_in_order(pool: PgPool) {
    let json = body_json(get(common::build_test_app(pool), "/api/reference/statuses").await).await;

    assert_eq!(
        json,
        json!([
            {"code": "PLANNED", "label": "Planned"},
            {"code": "IN_PROGRESS", "label": "In progress"},
            {"code": "ABORTED", "label": "Aborted"},
            {"code": "FINISHED", "label": "Finished"}
        ])
    );
}

#[sqlx::test(migrations = "../db/migrations")]
async fn reference_task_responsibles_lists_codes(pool: PgPool) {
    let json = body_json(
        get(common::build_test_app(pool), "/api/reference/task-responsibles").await,
    )
    .await;

    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|o| o["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, vec!["PLO", "GFU", "CTB", "GBP"]);
}
