pub mod health;
pub mod project;
pub mod reference;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                        list, create
/// /projects/search?name=                           name search
/// /projects/status/{status}                        status filter
/// /projects/{project_id}                           get, update, delete
/// /projects/{project_id}/status                    status-only update (PATCH)
/// /projects/{project_id}/tasks                     list, create
/// /projects/{project_id}/tasks/{task_id}           get, update, delete
/// /projects/{project_id}/tasks/{task_id}/status    status-only update (PATCH)
///
/// /reference/statuses                              status codes + labels
/// /reference/task-responsibles                     responsible codes
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/reference", reference::router())
}
