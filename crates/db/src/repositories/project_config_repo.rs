//! Repository for the `project_configs` table.
//!
//! Each project has at most one stored config. Writes replace the whole
//! snapshot; the last write wins.

use sqlx::types::Json;
use sqlx::PgExecutor;
use tablero_core::project_config::ProjectConfig;
use tablero_core::types::DbId;

/// Reads and replaces project board configs.
pub struct ProjectConfigRepo;

impl ProjectConfigRepo {
    /// Fetch the config stored for a project.
    pub async fn find_by_project<'e, E>(
        executor: E,
        project_id: DbId,
    ) -> Result<Option<ProjectConfig>, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let row: Option<Json<ProjectConfig>> =
            sqlx::query_scalar("SELECT config FROM project_configs WHERE project_id = $1")
                .bind(project_id)
                .fetch_optional(executor)
                .await?;
        Ok(row.map(|Json(config)| config))
    }

    /// Store `config` for a project, replacing any existing snapshot.
    pub async fn upsert<'e, E>(
        executor: E,
        project_id: DbId,
        config: &ProjectConfig,
    ) -> Result<ProjectConfig, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let Json(stored): Json<ProjectConfig> = sqlx::query_scalar(
            "INSERT INTO project_configs (project_id, config)
             VALUES ($1, $2)
             ON CONFLICT (project_id) DO UPDATE SET config = EXCLUDED.config
             RETURNING config",
        )
        .bind(project_id)
        .bind(Json(config))
        .fetch_one(executor)
        .await?;

        tracing::debug!(project_id, config_id = %stored.id, "Stored project config");
        Ok(stored)
    }
}
