//! Handlers for a project's board configuration.
//!
//! Also hosts the resolution of "where does a config come from" (project
//! type or status template) shared with project creation.

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use tablero_core::error::CoreError;
use tablero_core::project_config::{
    config_from_template, default_config, ProjectConfig, TemplateState,
};
use tablero_core::status_template::ProjectType;
use tablero_core::types::DbId;
use tablero_db::models::project::Project;
use tablero_db::repositories::{ProjectConfigRepo, ProjectRepo, StatusTemplateRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Config source resolution
// ---------------------------------------------------------------------------

/// The resolved input for deriving a project's board config.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Project type label after fallback.
    pub project_type: ProjectType,
    /// Template states, when the config comes from a status template.
    pub template: Option<(DbId, Vec<TemplateState>)>,
}

impl ConfigSource {
    /// Resolve the requested project type and optional template.
    ///
    /// Unknown project types fall back to `General` without an error. A
    /// template id that does not exist is a 404.
    pub async fn resolve(
        pool: &sqlx::PgPool,
        requested: &str,
        template_id: Option<DbId>,
    ) -> AppResult<Self> {
        let resolved = ProjectType::from_label(requested);
        if ProjectType::parse(requested).is_none() {
            tracing::debug!(requested, fallback = %resolved, "Unrecognized project type");
        }

        let template = match template_id {
            Some(id) => {
                let loaded = StatusTemplateRepo::find_with_states(pool, id)
                    .await?
                    .ok_or(AppError::Core(CoreError::NotFound {
                        entity: "StatusTemplate",
                        id,
                    }))?;
                if loaded.states.is_empty() {
                    tracing::warn!(
                        template_id = id,
                        "Template has no states, using General statuses"
                    );
                }
                Some((id, loaded.states))
            }
            None => None,
        };

        Ok(Self {
            project_type: resolved,
            template,
        })
    }

    pub fn template_id(&self) -> Option<DbId> {
        self.template.as_ref().map(|(id, _)| *id)
    }

    /// Derive the config for `project_id` from this source.
    pub fn derive(&self, project_id: DbId) -> ProjectConfig {
        let project_id = project_id.to_string();
        match &self.template {
            Some((_, states)) => config_from_template(&project_id, states),
            None => default_config(&project_id, self.project_type.label()),
        }
    }
}

// ---------------------------------------------------------------------------
// GET /projects/{id}/config
// ---------------------------------------------------------------------------

/// Get the stored board config of a project.
pub async fn get_config(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectConfig>>> {
    find_project(&state.pool, project_id).await?;

    let config = ProjectConfigRepo::find_by_project(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectConfig",
            id: project_id,
        }))?;

    Ok(Json(DataResponse { data: config }))
}

// ---------------------------------------------------------------------------
// PUT /projects/{id}/config
// ---------------------------------------------------------------------------

/// Request body for re-deriving a project's config.
///
/// An omitted `project_type` keeps the project's current type. An omitted
/// `template_id` derives the config from the project type.
#[derive(Debug, Deserialize)]
pub struct RegenerateConfig {
    pub project_type: Option<String>,
    pub template_id: Option<DbId>,
}

/// Re-derive a project's config and replace the stored snapshot.
///
/// The original `created_at` is kept; `updated_at` is the derivation time.
pub async fn regenerate_config(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(body): Json<RegenerateConfig>,
) -> AppResult<Json<DataResponse<ProjectConfig>>> {
    let current = find_project(&state.pool, project_id).await?;

    let requested = body
        .project_type
        .as_deref()
        .unwrap_or(current.project_type.as_str());
    let source = ConfigSource::resolve(&state.pool, requested, body.template_id).await?;

    let (project, config) = ProjectRepo::replace_config(
        &state.pool,
        project_id,
        source.project_type.label(),
        source.template_id(),
        source.derive(project_id),
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id: project_id,
    }))?;

    tracing::info!(
        project_id,
        previous_type = %current.project_type,
        project_type = %project.project_type,
        template_id = ?project.template_id,
        status_count = config.statuses.len(),
        "Project config replaced"
    );

    Ok(Json(DataResponse { data: config }))
}

async fn find_project(pool: &sqlx::PgPool, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}
