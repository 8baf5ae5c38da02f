use std::collections::HashMap;

use planboard_core::error::CoreError;
use planboard_core::schedule;
use planboard_core::types::DbId;
use planboard_db::models::project::{Project, ProjectInput, ProjectWithTasks};
use planboard_db::models::status::WorkStatus;
use planboard_db::models::task::Task;
use planboard_db::repositories::{ProjectRepo, TaskRepo};
use planboard_db::DbPool;
use sqlx::PgConnection;

use crate::error::AppResult;

const ENTITY: &str = "Project";

/// Operations on projects.
pub struct ProjectService;

impl ProjectService {
    /// All projects with their tasks.
    pub async fn list_all(pool: &DbPool) -> AppResult<Vec<ProjectWithTasks>> {
        tracing::debug!("Listing all projects");
        let mut conn = pool.acquire().await?;
        let projects = ProjectRepo::list(&mut *conn).await?;
        attach_tasks(&mut *conn, projects).await
    }

    /// A single project with its tasks.
    pub async fn find_by_id(pool: &DbPool, id: DbId) -> AppResult<ProjectWithTasks> {
        let mut conn = pool.acquire().await?;
        let project = ProjectRepo::find_by_id(&mut *conn, id)
            .await?
            .ok_or(CoreError::not_found(ENTITY, id))?;
        let tasks = TaskRepo::list_by_project(&mut *conn, id).await?;
        Ok(ProjectWithTasks::new(project, tasks))
    }

    /// Create a project.
    ///
    /// Rejects an end date before the start date and a missing status. A
    /// start date in the past is allowed but logged.
    pub async fn create(pool: &DbPool, input: &ProjectInput) -> AppResult<ProjectWithTasks> {
        schedule::validate_date_range(input.start_date, input.end_date)
            .map_err(CoreError::Business)?;
        let status = schedule::require_status(input.status).map_err(CoreError::Business)?;

        let today = chrono::Local::now().date_naive();
        if schedule::starts_in_past(input.start_date, today) {
            tracing::warn!(
                name = %input.name,
                start_date = ?input.start_date,
                "Project starts before today, check that this is intended",
            );
        }

        let mut tx = pool.begin().await?;
        let project = ProjectRepo::create(&mut *tx, input, status).await?;
        tx.commit().await?;

        tracing::info!(project_id = project.id, name = %project.name, "Project created");
        Ok(ProjectWithTasks::new(project, Vec::new()))
    }

    /// Overwrite a project's name, description, dates and status.
    ///
    /// Date ordering is not re-checked here. Tasks are untouched.
    pub async fn update(
        pool: &DbPool,
        id: DbId,
        input: &ProjectInput,
    ) -> AppResult<ProjectWithTasks> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut *tx, id).await?;
        let status = schedule::require_status(input.status).map_err(CoreError::Business)?;

        let project = ProjectRepo::update(&mut *tx, id, input, status)
            .await?
            .ok_or(CoreError::not_found(ENTITY, id))?;
        let tasks = TaskRepo::list_by_project(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!(project_id = id, "Project updated");
        Ok(ProjectWithTasks::new(project, tasks))
    }

    /// Replace only the status of a project.
    pub async fn update_status(
        pool: &DbPool,
        id: DbId,
        status: Option<WorkStatus>,
    ) -> AppResult<ProjectWithTasks> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut *tx, id).await?;
        let status = schedule::require_status(status).map_err(CoreError::Business)?;

        let project = ProjectRepo::update_status(&mut *tx, id, status)
            .await?
            .ok_or(CoreError::not_found(ENTITY, id))?;
        let tasks = TaskRepo::list_by_project(&mut *tx, id).await?;
        tx.commit().await?;

        tracing::info!(project_id = id, %status, "Project status updated");
        Ok(ProjectWithTasks::new(project, tasks))
    }

    /// Delete a project together with all of its tasks.
    pub async fn delete(pool: &DbPool, id: DbId) -> AppResult<()> {
        let mut tx = pool.begin().await?;
        ensure_exists(&mut *tx, id).await?;

        let tasks_removed = TaskRepo::delete_by_project(&mut *tx, id).await?;
        if !ProjectRepo::delete(&mut *tx, id).await? {
            return Err(CoreError::not_found(ENTITY, id).into());
        }
        tx.commit().await?;

        tracing::info!(project_id = id, tasks_removed, "Project deleted");
        Ok(())
    }

    /// Projects whose name contains `name`, ignoring case.
    pub async fn find_by_name(pool: &DbPool, name: &str) -> AppResult<Vec<ProjectWithTasks>> {
        let mut conn = pool.acquire().await?;
        let projects = ProjectRepo::search_by_name(&mut *conn, name).await?;
        attach_tasks(&mut *conn, projects).await
    }

    /// Projects currently in `status`.
    pub async fn find_by_status(
        pool: &DbPool,
        status: WorkStatus,
    ) -> AppResult<Vec<ProjectWithTasks>> {
        let mut conn = pool.acquire().await?;
        let projects = ProjectRepo::list_by_status(&mut *conn, status).await?;
        attach_tasks(&mut *conn, projects).await
    }
}

/// Fail with `NotFound` unless the project exists.
pub(crate) async fn ensure_exists(conn: &mut PgConnection, id: DbId) -> AppResult<()> {
    if ProjectRepo::exists(conn, id).await? {
        Ok(())
    } else {
        Err(CoreError::not_found(ENTITY, id).into())
    }
}

/// Load the tasks of every project in one query and pair them up.
async fn attach_tasks(
    conn: &mut PgConnection,
    projects: Vec<Project>,
) -> AppResult<Vec<ProjectWithTasks>> {
    let ids: Vec<DbId> = projects.iter().map(|p| p.id).collect();
    let mut by_project: HashMap<DbId, Vec<Task>> = HashMap::new();
    for task in TaskRepo::list_by_projects(conn, &ids).await? {
        by_project.entry(task.project_id).or_default().push(task);
    }

    Ok(projects
        .into_iter()
        .map(|project| {
            let tasks = by_project.remove(&project.id).unwrap_or_default();
            ProjectWithTasks::new(project, tasks)
        })
        .collect())
}
