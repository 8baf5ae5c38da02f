//! HTTP-level integration tests for tasks nested under `/projects/{id}/tasks`.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, create_project, create_task, delete, get, patch, patch_json,
    post_json, put_json,
};
use serde_json::json;
use sqlx::PgPool;

async fn project(pool: &PgPool) -> i64 {
    create_project(pool, json!({"name": "Host", "status": "PLANNED"})).await
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_returns_201(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({
            "title": "Design",
            "description": "Wireframes",
            "responsible": "GFU",
            "dueDays": 5,
            "status": "PLANNED"
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    assert!(json["id"].is_number());
    assert_eq!(json["projectId"], project_id);
    assert_eq!(json["title"], "Design");
    assert_eq!(json["description"], "Wireframes");
    assert_eq!(json["responsible"], "GFU");
    assert_eq!(json["dueDays"], 5);
    assert_eq!(json["status"], "PLANNED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_ignores_project_id_in_body(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({"title": "Pinned", "status": "PLANNED", "projectId": 987654}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["projectId"], project_id);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_under_missing_project_returns_404(pool: PgPool) {
    let response = post_json(
        build_test_app(pool.clone()),
        "/api/projects/999999/tasks",
        json!({"title": "Orphan", "status": "PLANNED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Project with id 999999 not found");

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM task")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_negative_due_days_is_rejected(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({"title": "Late", "dueDays": -1, "status": "PLANNED"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BUSINESS_ERROR");
    assert_eq!(json["error"], "Due days cannot be negative");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_zero_due_days_is_allowed(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({"title": "Today", "dueDays": 0, "status": "IN_PROGRESS"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(body_json(response).await["dueDays"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_missing_title_and_status(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({"description": "no title"}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["fieldErrors"]["title"], "must not be blank");
    assert_eq!(json["fieldErrors"]["status"], "must not be null");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_create_task_with_unknown_responsible_is_bad_request(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = post_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
        json!({"title": "Who", "responsible": "NOBODY", "status": "PLANNED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// List / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_of_project(pool: PgPool) {
    let project_id = project(&pool).await;
    let other = project(&pool).await;
    create_task(&pool, project_id, json!({"title": "first", "status": "PLANNED"})).await;
    create_task(&pool, project_id, json!({"title": "second", "status": "PLANNED"})).await;
    create_task(&pool, other, json!({"title": "elsewhere", "status": "PLANNED"})).await;

    let response = get(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let titles: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["first", "second"]);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_of_empty_project(pool: PgPool) {
    let project_id = project(&pool).await;

    let json = body_json(
        get(build_test_app(pool), &format!("/api/projects/{project_id}/tasks")).await,
    )
    .await;
    assert_eq!(json, json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_tasks_of_missing_project_returns_404(pool: PgPool) {
    let response = get(build_test_app(pool), "/api/projects/999999/tasks").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_task_by_id(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(&pool, project_id, json!({"title": "Read me", "status": "PLANNED"})).await;

    let response = get(
        build_test_app(pool.clone()),
        &format!("/api/projects/{project_id}/tasks/{task_id}"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["title"], "Read me");

    let response = get(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/999999"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Task with id 999999 not found");
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_overwrites_fields(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(
        &pool,
        project_id,
        json!({"title": "Old", "description": "gone", "responsible": "PLO", "dueDays": 3, "status": "PLANNED"}),
    )
    .await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/{task_id}"),
        json!({"title": "New", "responsible": "CTB", "status": "IN_PROGRESS"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["id"], task_id);
    assert_eq!(json["projectId"], project_id);
    assert_eq!(json["title"], "New");
    assert!(json["description"].is_null());
    assert_eq!(json["responsible"], "CTB");
    assert!(json["dueDays"].is_null());
    assert_eq!(json["status"], "IN_PROGRESS");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_task_with_negative_due_days_keeps_stored_value(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(&pool, project_id, json!({"title": "Keep", "dueDays": 2, "status": "PLANNED"})).await;

    let response = put_json(
        build_test_app(pool.clone()),
        &format!("/api/projects/{project_id}/tasks/{task_id}"),
        json!({"title": "Keep", "dueDays": -4, "status": "PLANNED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(
        get(
            build_test_app(pool),
            &format!("/api/projects/{project_id}/tasks/{task_id}"),
        )
        .await,
    )
    .await;
    assert_eq!(json["dueDays"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_update_missing_task_returns_404(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = put_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/999999"),
        json!({"title": "Ghost", "status": "PLANNED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Status-only update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_task_status_via_query(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(
        &pool,
        project_id,
        json!({"title": "Flow", "dueDays": 4, "responsible": "GBP", "status": "PLANNED"}),
    )
    .await;

    let response = patch(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/{task_id}/status?status=FINISHED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "FINISHED");
    assert_eq!(json["title"], "Flow");
    assert_eq!(json["dueDays"], 4);
    assert_eq!(json["responsible"], "GBP");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_task_status_via_body(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(&pool, project_id, json!({"title": "Body", "status": "PLANNED"})).await;

    let response = patch_json(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/{task_id}/status"),
        json!({"status": "ABORTED"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "ABORTED");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_patch_task_status_errors(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(&pool, project_id, json!({"title": "Err", "status": "PLANNED"})).await;
    let uri = format!("/api/projects/{project_id}/tasks/{task_id}/status");

    let response = patch(build_test_app(pool.clone()), &format!("{uri}?status=LATER")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid status: LATER");

    let response = patch(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Status is required");

    let response = patch(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/999999/status?status=FINISHED"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_delete_task_returns_204(pool: PgPool) {
    let project_id = project(&pool).await;
    let task_id = create_task(&pool, project_id, json!({"title": "Bye", "status": "PLANNED"})).await;
    let uri = format!("/api/projects/{project_id}/tasks/{task_id}");

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete(build_test_app(pool.clone()), &uri).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The parent project is untouched.
    let response = get(build_test_app(pool), &format!("/api/projects/{project_id}")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["tasks"], json!([]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn test_non_numeric_task_id_is_json_bad_request(pool: PgPool) {
    let project_id = project(&pool).await;

    let response = delete(
        build_test_app(pool),
        &format!("/api/projects/{project_id}/tasks/first"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}
