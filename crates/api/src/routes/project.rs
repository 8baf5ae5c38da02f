//! Route definitions for the `/projects` resource and its nested tasks.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{project, task};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /search?name=                          -> search
/// GET    /status/{status}                       -> list_by_status
/// GET    /{project_id}                          -> get_by_id
/// PUT    /{project_id}                          -> update
/// DELETE /{project_id}                          -> delete
/// PATCH  /{project_id}/status                   -> update_status
///
/// GET    /{project_id}/tasks                    -> list_by_project
/// POST   /{project_id}/tasks                    -> create
/// GET    /{project_id}/tasks/{task_id}          -> get_by_id
/// PUT    /{project_id}/tasks/{task_id}          -> update
/// DELETE /{project_id}/tasks/{task_id}          -> delete
/// PATCH  /{project_id}/tasks/{task_id}/status   -> update_status
/// ```
pub fn router() -> Router<AppState> {
    let task_routes = Router::new()
        .route("/", get(task::list_by_project).post(task::create))
        .route(
            "/{task_id}",
            get(task::get_by_id).put(task::update).delete(task::delete),
        )
        .route("/{task_id}/status", patch(task::update_status));

    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/search", get(project::search))
        .route("/status/{status}", get(project::list_by_status))
        .route(
            "/{project_id}",
            get(project::get_by_id)
                .put(project::update)
                .delete(project::delete),
        )
        .route("/{project_id}/status", patch(project::update_status))
        .nest("/{project_id}/tasks", task_routes)
}
