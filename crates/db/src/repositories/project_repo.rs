//! Repository for the `projects` table.

use sqlx::{PgExecutor, PgPool};
use tablero_core::project_config::ProjectConfig;
use tablero_core::types::DbId;

use crate::models::project::{Project, UpdateProject};
use crate::repositories::ProjectConfigRepo;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, description, project_type, template_id, created_at, updated_at";

/// Values stored for a new project once its type and template are resolved.
#[derive(Debug, Clone)]
pub struct NewProject<'a> {
    pub name: &'a str,
    pub description: Option<&'a str>,
    pub project_type: &'a str,
    pub template_id: Option<DbId>,
}

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a project and its board config in one transaction.
    ///
    /// `derive_config` receives the inserted row (with its new id) and
    /// returns the config to store for it.
    pub async fn create_with_config<F>(
        pool: &PgPool,
        input: &NewProject<'_>,
        derive_config: F,
    ) -> Result<(Project, ProjectConfig), sqlx::Error>
    where
        F: FnOnce(&Project) -> ProjectConfig,
    {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO projects (name, description, project_type, template_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(input.name)
            .bind(input.description)
            .bind(input.project_type)
            .bind(input.template_id)
            .fetch_one(&mut *tx)
            .await?;

        let config = derive_config(&project);
        let config = ProjectConfigRepo::upsert(&mut *tx, project.id, &config).await?;

        tx.commit().await?;
        Ok((project, config))
    }

    /// Find a project by its internal ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first. Excludes soft-deleted rows.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE deleted_at IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Update a project. Only non-`None` fields in `input` are applied, and a
    /// new name is stored trimmed.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                name = COALESCE($2, name),
                description = COALESCE($3, description)
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(input.name.as_deref().map(str::trim))
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Record the type and template a project's config was last derived from.
    ///
    /// Returns `None` if the project is missing or soft-deleted.
    pub async fn set_config_source<'e, E>(
        executor: E,
        id: DbId,
        project_type: &str,
        template_id: Option<DbId>,
    ) -> Result<Option<Project>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let query = format!(
            "UPDATE projects SET project_type = $2, template_id = $3
             WHERE id = $1 AND deleted_at IS NULL
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(project_type)
            .bind(template_id)
            .fetch_optional(executor)
            .await
    }

    /// Record a new config source and replace the stored config in one
    /// transaction.
    ///
    /// The replacement keeps the previous snapshot's `created_at`. Returns
    /// `None`, with nothing written, if the project is missing or
    /// soft-deleted.
    pub async fn replace_config(
        pool: &PgPool,
        id: DbId,
        project_type: &str,
        template_id: Option<DbId>,
        mut config: ProjectConfig,
    ) -> Result<Option<(Project, ProjectConfig)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        // Updating the project first holds its row lock until commit, so a
        // concurrent soft delete either lands before (and we write nothing)
        // or waits for us.
        let Some(project) =
            Self::set_config_source(&mut *tx, id, project_type, template_id).await?
        else {
            return Ok(None);
        };

        if let Some(previous) = ProjectConfigRepo::find_by_project(&mut *tx, id).await? {
            config.created_at = previous.created_at;
        }
        let config = ProjectConfigRepo::upsert(&mut *tx, id, &config).await?;

        tx.commit().await?;
        Ok(Some((project, config)))
    }

    /// Soft-delete a project by ID. Returns `true` if a row was marked deleted.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL",
        )
        .bind(id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
