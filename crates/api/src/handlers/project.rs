//! Handlers for the `/projects` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use tablero_core::error::CoreError;
use tablero_core::project_config::{validate_project_name, ProjectConfig};
use tablero_core::status_template::DEFAULT_PROJECT_TYPE;
use tablero_core::types::DbId;
use tablero_db::models::project::{CreateProject, Project, UpdateProject};
use tablero_db::repositories::project_repo::NewProject;
use tablero_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project_config::ConfigSource;
use crate::response::DataResponse;
use crate::state::AppState;

/// A newly created project together with its derived board config.
#[derive(Debug, Serialize)]
pub struct CreatedProject {
    pub project: Project,
    pub config: ProjectConfig,
}

/// POST /api/v1/projects
///
/// Creates the project and its board config in one transaction. The config
/// comes from `template_id` when given, otherwise from `project_type`.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedProject>>)> {
    input.validate()?;
    validate_project_name(&input.name)?;

    let requested = input.project_type.as_deref().unwrap_or(DEFAULT_PROJECT_TYPE);
    let source = ConfigSource::resolve(&state.pool, requested, input.template_id).await?;

    let new_project = NewProject {
        name: input.name.trim(),
        description: input.description.as_deref(),
        project_type: source.project_type.label(),
        template_id: source.template_id(),
    };
    let (project, config) =
        ProjectRepo::create_with_config(&state.pool, &new_project, |p| source.derive(p.id)).await?;

    tracing::info!(
        project_id = project.id,
        project_type = %project.project_type,
        template_id = ?project.template_id,
        "Project created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedProject { project, config },
        }),
    ))
}

/// GET /api/v1/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    input.validate()?;
    if let Some(ref name) = input.name {
        validate_project_name(name)?;
    }

    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: project }))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let deleted = ProjectRepo::soft_delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
