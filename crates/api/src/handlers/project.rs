//! Handlers for the `/projects` resource.

use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use planboard_core::types::DbId;
use planboard_db::models::project::{ProjectInput, ProjectWithTasks};

use crate::error::{AppError, AppResult};
use crate::middleware::{PathParams, ValidatedJson};
use crate::query::{parse_status, SearchParams, StatusParams};
use crate::services::ProjectService;
use crate::state::AppState;

/// POST /api/projects
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<ProjectInput>,
) -> AppResult<(StatusCode, Json<ProjectWithTasks>)> {
    let project = ProjectService::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ProjectWithTasks>>> {
    let projects = ProjectService::list_all(&state.pool).await?;
    Ok(Json(projects))
}

/// GET /api/projects/{project_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<Json<ProjectWithTasks>> {
    let project = ProjectService::find_by_id(&state.pool, id).await?;
    Ok(Json(project))
}

/// PUT /api/projects/{project_id}
///
/// Full overwrite: omitted optional fields are cleared.
pub async fn update(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    ValidatedJson(input): ValidatedJson<ProjectInput>,
) -> AppResult<Json<ProjectWithTasks>> {
    let project = ProjectService::update(&state.pool, id, &input).await?;
    Ok(Json(project))
}

/// PATCH /api/projects/{project_id}/status?status=FINISHED
pub async fn update_status(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
    Query(params): Query<StatusParams>,
    body: Bytes,
) -> AppResult<Json<ProjectWithTasks>> {
    let status = params.resolve(&body)?;
    let project = ProjectService::update_status(&state.pool, id, status).await?;
    Ok(Json(project))
}

/// DELETE /api/projects/{project_id}
pub async fn delete(
    State(state): State<AppState>,
    PathParams(id): PathParams<DbId>,
) -> AppResult<StatusCode> {
    ProjectService::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/projects/search?name=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<ProjectWithTasks>>> {
    let name = params
        .name
        .ok_or_else(|| AppError::BadRequest("Query parameter 'name' is required".into()))?;
    let projects = ProjectService::find_by_name(&state.pool, &name).await?;
    Ok(Json(projects))
}

/// GET /api/projects/status/{status}
pub async fn list_by_status(
    State(state): State<AppState>,
    PathParams(status): PathParams<String>,
) -> AppResult<Json<Vec<ProjectWithTasks>>> {
    let status = parse_status(&status)?;
    let projects = ProjectService::find_by_status(&state.pool, status).await?;
    Ok(Json(projects))
}
