//! Repository for the `task` table.

use planboard_core::types::DbId;
use sqlx::PgConnection;

use crate::models::status::WorkStatus;
use crate::models::task::{Task, TaskInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, title, description, responsible, due_days, status";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task under `project_id`, returning the created row.
    pub async fn create(
        conn: &mut PgConnection,
        project_id: DbId,
        input: &TaskInput,
        status: WorkStatus,
    ) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO task (project_id, title, description, responsible, due_days, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.responsible)
            .bind(input.due_days)
            .bind(status)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a task by its ID.
    pub async fn find_by_id(conn: &mut PgConnection, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// List all tasks for a given project in insertion order.
    pub async fn list_by_project(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM task WHERE project_id = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(&mut *conn)
            .await
    }

    /// List the tasks of several projects at once, ordered by project then id.
    pub async fn list_by_projects(
        conn: &mut PgConnection,
        project_ids: &[DbId],
    ) -> Result<Vec<Task>, sqlx::Error> {
        if project_ids.is_empty() {
            return Ok(Vec::new());
        }
        let query = format!(
            "SELECT {COLUMNS} FROM task
             WHERE project_id = ANY($1)
             ORDER BY project_id ASC, id ASC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_ids)
            .fetch_all(&mut *conn)
            .await
    }

    /// Overwrite title, description, responsible, due days and status.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &TaskInput,
        status: WorkStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE task SET
                title = $2,
                description = $3,
                responsible = $4,
                due_days = $5,
                status = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.responsible)
            .bind(input.due_days)
            .bind(status)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Set only the status column. Returns `None` if the row does not exist.
    pub async fn update_status(
        conn: &mut PgConnection,
        id: DbId,
        status: WorkStatus,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("UPDATE task SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every task owned by `project_id`. Returns the number removed.
    pub async fn delete_by_project(
        conn: &mut PgConnection,
        project_id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM task WHERE project_id = $1")
            .bind(project_id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }
}
