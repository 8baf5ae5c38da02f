//! Handlers for the `/tasks` resource.
//!
//! Tasks are nested under projects:
//! `/projects/{project_id}/tasks[/{task_id}]`
//!
//! Only create and list use the project id; the single-task routes address
//! the task by its own id.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use planboard_core::types::DbId;
use planboard_db::models::task::{Task, TaskInput};

use crate::error::AppResult;
use crate::middleware::{PathParams, ValidatedJson};
use crate::query::StatusParams;
use crate::services::TaskService;
use crate::state::AppState;

/// POST /api/projects/{project_id}/tasks
pub async fn create(
    State(state): State<AppState>,
    PathParams(project_id): PathParams<DbId>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> AppResult<(StatusCode, Json<Task>)> {
    let task = TaskService::create(&state.pool, project_id, &input).await?;
    Ok((StatusCode::CREATED, Json(task)))
}

/// GET /api/projects/{project_id}/tasks
pub async fn list_by_project(
    State(state): State<AppState>,
    PathParams(project_id): PathParams<DbId>,
) -> AppResult<Json<Vec<Task>>> {
    let tasks = TaskService::list_by_project(&state.pool, project_id).await?;
    Ok(Json(tasks))
}

/// GET /api/projects/{project_id}/tasks/{task_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParams((_project_id, task_id)): PathParams<(DbId, DbId)>,
) -> AppResult<Json<Task>> {
    let task = TaskService::find_by_id(&state.pool, task_id).await?;
    Ok(Json(task))
}

/// PUT /api/projects/{project_id}/tasks/{task_id}
pub async fn update(
    State(state): State<AppState>,
    PathParams((_project_id, task_id)): PathParams<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<TaskInput>,
) -> AppResult<Json<Task>> {
    let task = TaskService::update(&state.pool, task_id, &input).await?;
    Ok(Json(task))
}

/// PATCH /api/projects/{project_id}/tasks/{task_id}/status
pub async fn update_status(
    State(state): State<AppState>,
    PathParams((_project_id, task_id)): PathParams<(DbId, DbId)>,
    Query(params): Query<StatusParams>,
    body: Bytes,
) -> AppResult<Json<Task>> {
    let status = params.resolve(&body)?;
    let task = TaskService::update_status(&state.pool, task_id, status).await?;
    Ok(Json(task))
}

/// DELETE /api/projects/{project_id}/tasks/{task_id}
pub async fn delete(
    State(state): State<AppState>,
    PathParams((_project_id, task_id)): PathParams<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    TaskService::delete(&state.pool, task_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
