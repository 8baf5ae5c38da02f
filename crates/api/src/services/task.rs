use planboard_core::error::CoreError;
use planboard_core::schedule;
use planboard_core::types::DbId;
use planboard_db::models::status::WorkStatus;
use planboard_db::models::task::{Task, TaskInput};
use planboard_db::repositories::TaskRepo;
use planboard_db::DbPool;
use sqlx::PgConnection;

use crate::error::AppResult;
use crate::services::project::ensure_exists as ensure_project_exists;

const ENTITY: &str = "Task";

/// Operations on tasks. Every task is reached by its own id; the parent
/// project is only consulted on create and list.
pub struct TaskService;

impl TaskService {
    /// Create a task under an existing project.
    pub async fn create(pool: &DbPool, project_id: DbId, input: &TaskInput) -> AppResult<Task> {
        let mut tx = pool.begin().await?;
        ensure_project_exists(&mut *tx, project_id).await?;
        let status = check_task(input)?;

        let task = TaskRepo::create(&mut *tx, project_id, input, status).await?;
        tx.commit().await?;

        tracing::info!(task_id = task.id, project_id, title = %task.title, "Task created");
        Ok(task)
    }

    /// All tasks of a project, oldest first.
    pub async fn list_by_project(pool: &DbPool, project_id: DbId) -> AppResult<Vec<Task>> {
        let mut conn = pool.acquire().await?;
        ensure_project_exists(&mut *conn, project_id).await?;
        Ok(TaskRepo::list_by_project(&mut *conn, project_id).await?)
    }

    pub async fn find_by_id(pool: &DbPool, task_id: DbId) -> AppResult<Task> {
        let mut conn = pool.acquire().await?;
        load(&mut *conn, task_id).await
    }

    /// Overwrite title, description, responsible, due days and status.
    pub async fn update(pool: &DbPool, task_id: DbId, input: &TaskInput) -> AppResult<Task> {
        let mut tx = pool.begin().await?;
        load(&mut *tx, task_id).await?;
        let status = check_task(input)?;

        let task = TaskRepo::update(&mut *tx, task_id, input, status)
            .await?
            .ok_or(CoreError::not_found(ENTITY, task_id))?;
        tx.commit().await?;

        tracing::info!(task_id, "Task updated");
        Ok(task)
    }

    pub async fn delete(pool: &DbPool, task_id: DbId) -> AppResult<()> {
        let mut conn = pool.acquire().await?;
        if !TaskRepo::delete(&mut *conn, task_id).await? {
            return Err(CoreError::not_found(ENTITY, task_id).into());
        }
        tracing::info!(task_id, "Task deleted");
        Ok(())
    }

    /// Replace only the status of a task.
    pub async fn update_status(
        pool: &DbPool,
        task_id: DbId,
        status: Option<WorkStatus>,
    ) -> AppResult<Task> {
        let mut tx = pool.begin().await?;
        load(&mut *tx, task_id).await?;
        let status = schedule::require_status(status).map_err(CoreError::Business)?;

        let task = TaskRepo::update_status(&mut *tx, task_id, status)
            .await?
            .ok_or(CoreError::not_found(ENTITY, task_id))?;
        tx.commit().await?;

        tracing::info!(task_id, %status, "Task status updated");
        Ok(task)
    }
}

async fn load(conn: &mut PgConnection, task_id: DbId) -> AppResult<Task> {
    TaskRepo::find_by_id(conn, task_id)
        .await?
        .ok_or_else(|| CoreError::not_found(ENTITY, task_id).into())
}

/// Business checks shared by create and update. Returns the status.
fn check_task(input: &TaskInput) -> AppResult<WorkStatus> {
    schedule::validate_due_days(input.due_days).map_err(CoreError::Business)?;
    Ok(schedule::require_status(input.status).map_err(CoreError::Business)?)
}
