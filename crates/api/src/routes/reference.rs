use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes mounted at `/reference`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/statuses", get(reference::statuses))
        .route("/task-responsibles", get(reference::task_responsibles))
}
