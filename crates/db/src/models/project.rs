//! Project entity model and DTOs.

use planboard_core::types::{Date, DbId};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::status::WorkStatus;
use crate::models::task::Task;
use crate::models::validation::not_blank;

/// A project row from the `project` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub team_responsible: Option<String>,
    pub status: WorkStatus,
}

/// A project together with the tasks it owns, as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectWithTasks {
    #[serde(flatten)]
    pub project: Project,
    pub tasks: Vec<Task>,
}

impl ProjectWithTasks {
    pub fn new(project: Project, tasks: Vec<Task>) -> Self {
        Self { project, tasks }
    }
}

/// DTO for creating a project and for the full-overwrite update.
///
/// `name` defaults to empty when omitted so a missing name surfaces as a
/// field error instead of a deserialization failure. `status` is an
/// `Option` for the same reason.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInput {
    #[serde(default)]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    pub description: Option<String>,
    pub start_date: Option<Date>,
    pub end_date: Option<Date>,
    pub team_responsible: Option<String>,
    #[validate(required(message = "must not be null"))]
    pub status: Option<WorkStatus>,
}
