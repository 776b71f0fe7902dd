//! Read-only catalogs backing the project creation form.

use axum::Json;
use serde::Serialize;

use tablero_core::grid_column::{available_columns, default_columns, GridColumn};
use tablero_core::status_template::{statuses_for, ProjectStatus, ProjectType};

use crate::response::DataResponse;

/// A project type and the statuses a new project of that type starts with.
#[derive(Debug, Serialize)]
pub struct ProjectTypeInfo {
    pub label: &'static str,
    pub statuses: Vec<ProjectStatus>,
}

/// The grid column catalog.
#[derive(Debug, Serialize)]
pub struct GridColumnCatalog {
    pub default: Vec<GridColumn>,
    pub available: Vec<GridColumn>,
}

/// GET /api/v1/project-types
pub async fn list_project_types() -> Json<DataResponse<Vec<ProjectTypeInfo>>> {
    let data = ProjectType::ALL
        .into_iter()
        .map(|project_type| ProjectTypeInfo {
            label: project_type.label(),
            statuses: statuses_for(project_type),
        })
        .collect();
    Json(DataResponse { data })
}

/// GET /api/v1/grid-columns
pub async fn list_grid_columns() -> Json<DataResponse<GridColumnCatalog>> {
    Json(DataResponse {
        data: GridColumnCatalog {
            default: default_columns(),
            available: available_columns(),
        },
    })
}
