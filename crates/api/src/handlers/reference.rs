//! Read-only lookup lists for clients rendering dropdowns and badges.

use axum::Json;
use planboard_db::models::status::{TaskResponsible, WorkStatus};
use serde::Serialize;

/// One selectable enum value.
#[derive(Debug, Serialize)]
pub struct EnumOption {
    pub code: &'static str,
    pub label: &'static str,
}

/// GET /api/reference/statuses
pub async fn statuses() -> Json<Vec<EnumOption>> {
    Json(
        WorkStatus::ALL
            .iter()
            .map(|s| EnumOption {
                code: s.as_str(),
                label: s.label(),
            })
            .collect(),
    )
}

/// GET /api/reference/task-responsibles
pub async fn task_responsibles() -> Json<Vec<EnumOption>> {
    Json(
        TaskResponsible::ALL
            .iter()
            .map(|r| EnumOption {
                code: r.as_str(),
                label: r.label(),
            })
            .collect(),
    )
}
