//! Repository for the `project` table.

use planboard_core::types::DbId;
use sqlx::PgConnection;

use crate::models::project::{Project, ProjectInput};
use crate::models::status::WorkStatus;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, start_date, end_date, team_responsible, status";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    ///
    /// `status` is passed separately because the input DTO keeps it optional
    /// until the caller has checked it.
    pub async fn create(
        conn: &mut PgConnection,
        input: &ProjectInput,
        status: WorkStatus,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO project (name, description, start_date, end_date, team_responsible, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.team_responsible)
            .bind(status)
            .fetch_one(&mut *conn)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Whether a project with the given ID exists.
    pub async fn exists(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM project WHERE id = $1)")
            .bind(id)
            .fetch_one(&mut *conn)
            .await
    }

    /// List all projects in insertion order.
    pub async fn list(conn: &mut PgConnection) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query)
            .fetch_all(&mut *conn)
            .await
    }

    /// Case-insensitive substring match on the project name.
    pub async fn search_by_name(
        conn: &mut PgConnection,
        name: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM project
             WHERE LOWER(name) LIKE '%' || LOWER($1) || '%'
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(name)
            .fetch_all(&mut *conn)
            .await
    }

    /// List projects whose status equals `status`.
    pub async fn list_by_status(
        conn: &mut PgConnection,
        status: WorkStatus,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project WHERE status = $1 ORDER BY id ASC");
        sqlx::query_as::<_, Project>(&query)
            .bind(status)
            .fetch_all(&mut *conn)
            .await
    }

    /// Overwrite name, description, dates and status.
    ///
    /// Every listed column is replaced, `None` included; `team_responsible`
    /// keeps its stored value. Returns `None` if no row with the given `id`
    /// exists.
    pub async fn update(
        conn: &mut PgConnection,
        id: DbId,
        input: &ProjectInput,
        status: WorkStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE project SET
                name = $2,
                description = $3,
                start_date = $4,
                end_date = $5,
                status = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(status)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Set only the status column. Returns `None` if the row does not exist.
    pub async fn update_status(
        conn: &mut PgConnection,
        id: DbId,
        status: WorkStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE project SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status)
            .fetch_optional(&mut *conn)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    ///
    /// The foreign key on `task.project_id` cascades, so any task still
    /// attached is removed with it.
    pub async fn delete(conn: &mut PgConnection, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
