//! Task entity model and DTOs.

use planboard_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::{TaskResponsible, WorkStatus};
use crate::models::validation::not_blank;

/// A task row from the `task` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub responsible: Option<TaskResponsible>,
    pub due_days: Option<i32>,
    pub status: WorkStatus,
}

/// DTO for creating a task and for the full-overwrite update.
///
/// The parent project always comes from the URL path, never the body.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub title: String,
    pub description: Option<String>,
    pub responsible: Option<TaskResponsible>,
    pub due_days: Option<i32>,
    #[validate(required(message = "must not be null"))]
    pub status: Option<WorkStatus>,
}
