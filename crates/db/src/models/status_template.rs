//! Status template model and DTOs.
//!
//! A status template is a named, reusable list of workflow states that new
//! projects can derive their board statuses from.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use tablero_core::project_config::{NewTemplateState, TemplateState};
use tablero_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `status_templates` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusTemplate {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `status_template_states` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct StatusTemplateState {
    pub id: DbId,
    pub template_id: DbId,
    pub name: String,
    pub color: String,
    pub sort_order: i32,
    pub is_default: bool,
}

impl From<&StatusTemplateState> for TemplateState {
    fn from(row: &StatusTemplateState) -> Self {
        TemplateState {
            id: row.id,
            name: row.name.clone(),
            color: row.color.clone(),
            order: row.sort_order,
            is_default: row.is_default,
        }
    }
}

/// A template together with its states, in submission order.
#[derive(Debug, Clone, Serialize)]
pub struct StatusTemplateWithStates {
    #[serde(flatten)]
    pub template: StatusTemplate,
    pub states: Vec<TemplateState>,
}

impl StatusTemplateWithStates {
    pub fn new(template: StatusTemplate, rows: &[StatusTemplateState]) -> Self {
        Self {
            template,
            states: rows.iter().map(TemplateState::from).collect(),
        }
    }
}

/// DTO for creating a new status template with its states.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStatusTemplate {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 2000))]
    pub description: Option<String>,
    pub states: Vec<NewTemplateState>,
}
