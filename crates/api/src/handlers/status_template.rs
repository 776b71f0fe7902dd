//! Handlers for reusable status templates.
//!
//! ```text
//! GET    /status-templates          list
//! POST   /status-templates          create
//! GET    /status-templates/{id}     get_by_id (with states)
//! DELETE /status-templates/{id}     delete
//! ```

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use validator::Validate;

use tablero_core::error::CoreError;
use tablero_core::project_config::{validate_template_name, validate_template_states};
use tablero_core::status_name::{find_status_id_collisions, StatusIdCollision};
use tablero_core::types::DbId;
use tablero_db::models::status_template::{
    CreateStatusTemplate, StatusTemplate, StatusTemplateWithStates,
};
use tablero_db::repositories::StatusTemplateRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// List all templates (without states).
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<StatusTemplate>>>> {
    let templates = StatusTemplateRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: templates }))
}

/// Get one template with its states in submission order.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<StatusTemplateWithStates>>> {
    let template = StatusTemplateRepo::find_with_states(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "StatusTemplate",
            id,
        }))?;
    Ok(Json(DataResponse { data: template }))
}

/// A newly created template plus the state names that share a status id.
#[derive(Debug, Serialize)]
pub struct CreatedTemplate {
    #[serde(flatten)]
    pub template: StatusTemplateWithStates,
    pub status_id_collisions: Vec<StatusIdCollision>,
}

/// Create a template with its states.
///
/// State names that normalize to the same status id are accepted, logged,
/// and echoed back in `status_id_collisions`, since projects derived from
/// the template will carry duplicate status ids.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateStatusTemplate>,
) -> AppResult<(StatusCode, Json<DataResponse<CreatedTemplate>>)> {
    input.validate()?;
    validate_template_name(&input.name)?;
    validate_template_states(&input.states)?;

    let collisions = find_status_id_collisions(input.states.iter().map(|s| s.name.as_str()));

    let created = StatusTemplateRepo::create(&state.pool, &input).await?;

    for collision in &collisions {
        tracing::warn!(
            template_id = created.template.id,
            status_id = %collision.status_id,
            names = ?collision.names,
            "Template state names normalize to the same status id"
        );
    }
    tracing::info!(
        template_id = created.template.id,
        state_count = created.states.len(),
        "Status template created"
    );

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CreatedTemplate {
                template: created,
                status_id_collisions: collisions,
            },
        }),
    ))
}

/// Delete a template. Projects derived from it keep their config snapshot.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if StatusTemplateRepo::delete(&state.pool, id).await? {
        tracing::info!(template_id = id, "Status template deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "StatusTemplate",
            id,
        }))
    }
}
