//! Catalog of task fields the grid (table) view can display.

use serde::{Deserialize, Serialize};

/// The fixed vocabulary of grid column ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GridColumnId {
    Title,
    Status,
    Priority,
    Assignee,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DueDate,
    Description,
}

/// One column of the task grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridColumn {
    pub id: GridColumnId,
    pub name: String,
    pub enabled: bool,
    pub order: i32,
    /// Sizing token for the column, `None` lets the grid decide.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<String>,
}

struct ColumnDef {
    id: GridColumnId,
    name: &'static str,
    enabled: bool,
    width: Option<&'static str>,
}

const fn column(
    id: GridColumnId,
    name: &'static str,
    enabled: bool,
    width: Option<&'static str>,
) -> ColumnDef {
    ColumnDef {
        id,
        name,
        enabled,
        width,
    }
}

const DEFAULT_COLUMNS: &[ColumnDef] = &[
    column(GridColumnId::Title, "Título", true, Some("w-80")),
    column(GridColumnId::Status, "Estado", true, Some("w-36")),
    column(GridColumnId::Priority, "Prioridad", true, Some("w-28")),
    column(GridColumnId::Assignee, "Asignado a", true, Some("w-40")),
    column(GridColumnId::DueDate, "Fecha límite", true, Some("w-32")),
];

const AVAILABLE_COLUMNS: &[ColumnDef] = &[
    column(GridColumnId::Title, "Título", true, Some("w-80")),
    column(GridColumnId::Status, "Estado", true, Some("w-36")),
    column(GridColumnId::Priority, "Prioridad", true, Some("w-28")),
    column(GridColumnId::Assignee, "Asignado a", true, Some("w-40")),
    column(GridColumnId::CreatedBy, "Creado por", false, Some("w-40")),
    column(GridColumnId::CreatedAt, "Fecha de creación", false, Some("w-32")),
    column(GridColumnId::UpdatedAt, "Última actualización", false, Some("w-32")),
    column(GridColumnId::DueDate, "Fecha límite", true, Some("w-32")),
    column(GridColumnId::Description, "Descripción", false, None),
];

fn materialize(defs: &[ColumnDef]) -> Vec<GridColumn> {
    defs.iter()
        .zip(0..)
        .map(|(def, order)| GridColumn {
            id: def.id,
            name: def.name.to_string(),
            enabled: def.enabled,
            order,
            width: def.width.map(str::to_string),
        })
        .collect()
}

/// Columns every new project config starts with. All enabled.
pub fn default_columns() -> Vec<GridColumn> {
    materialize(DEFAULT_COLUMNS)
}

/// Every column the grid supports, some disabled until the user opts in.
pub fn available_columns() -> Vec<GridColumn> {
    materialize(AVAILABLE_COLUMNS)
}
