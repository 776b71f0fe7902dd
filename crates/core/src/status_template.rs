//! Built-in workflow stages per project type.
//!
//! Each project type maps to a fixed, ordered list of statuses. The table is
//! compiled into the binary and never mutated. Lookups by label are total:
//! any label that is not one of the four known types resolves to
//! [`ProjectType::General`].

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Project types
// ---------------------------------------------------------------------------

/// Label used when a caller does not name a project type.
pub const DEFAULT_PROJECT_TYPE: &str = "General";

/// The project types that have a built-in status template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Desarrollo de Software")]
    SoftwareDevelopment,
    #[serde(rename = "Marketing")]
    Marketing,
    #[serde(rename = "Diseño")]
    Design,
    #[serde(rename = "General")]
    General,
}

impl ProjectType {
    /// Every project type, in the order they are offered to users.
    pub const ALL: [ProjectType; 4] = [
        ProjectType::SoftwareDevelopment,
        ProjectType::Marketing,
        ProjectType::Design,
        ProjectType::General,
    ];

    /// The display label, which is also the lookup key.
    pub fn label(self) -> &'static str {
        match self {
            ProjectType::SoftwareDevelopment => "Desarrollo de Software",
            ProjectType::Marketing => "Marketing",
            ProjectType::Design => "Diseño",
            ProjectType::General => DEFAULT_PROJECT_TYPE,
        }
    }

    /// Exact label match. Returns `None` for anything unrecognized.
    pub fn parse(label: &str) -> Option<ProjectType> {
        Self::ALL.into_iter().find(|t| t.label() == label)
    }

    /// Label match with fallback to [`ProjectType::General`].
    pub fn from_label(label: &str) -> ProjectType {
        Self::parse(label).unwrap_or(ProjectType::General)
    }
}

impl std::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Statuses
// ---------------------------------------------------------------------------

/// One stage of a project's workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectStatus {
    pub id: String,
    pub name: String,
    /// Style-class token used by the board UI.
    pub color: String,
    pub order: i32,
}

/// Static row of the template table. `order` is the row's position.
struct StatusDef {
    id: &'static str,
    name: &'static str,
    color: &'static str,
}

const fn status(id: &'static str, name: &'static str, color: &'static str) -> StatusDef {
    StatusDef { id, name, color }
}

const SOFTWARE_DEVELOPMENT: &[StatusDef] = &[
    status("POR_HACER", "Por Hacer", "bg-slate-500"),
    status("EN_PROGRESO", "En Progreso", "bg-blue-500"),
    status("EN_REVISION", "En Revisión", "bg-amber-500"),
    status("PRUEBAS", "Pruebas", "bg-purple-500"),
    status("COMPLETADO", "Completado", "bg-green-500"),
];

const MARKETING: &[StatusDef] = &[
    status("IDEAS", "Ideas", "bg-slate-500"),
    status("PLANIFICACION", "Planificación", "bg-sky-500"),
    status("EN_EJECUCION", "En Ejecución", "bg-orange-500"),
    status("PUBLICADO", "Publicado", "bg-green-500"),
];

const DESIGN: &[StatusDef] = &[
    status("BRIEF", "Brief", "bg-slate-500"),
    status("DISENANDO", "Diseñando", "bg-pink-500"),
    status("FEEDBACK", "Feedback", "bg-amber-500"),
    status("APROBADO", "Aprobado", "bg-green-500"),
];

const GENERAL: &[StatusDef] = &[
    status("POR_HACER", "Por Hacer", "bg-slate-500"),
    status("EN_PROGRESO", "En Progreso", "bg-blue-500"),
    status("COMPLETADO", "Completado", "bg-green-500"),
];

fn table_for(project_type: ProjectType) -> &'static [StatusDef] {
    match project_type {
        ProjectType::SoftwareDevelopment => SOFTWARE_DEVELOPMENT,
        ProjectType::Marketing => MARKETING,
        ProjectType::Design => DESIGN,
        ProjectType::General => GENERAL,
    }
}

/// The built-in statuses of a project type, orders `0..n`.
pub fn statuses_for(project_type: ProjectType) -> Vec<ProjectStatus> {
    table_for(project_type)
        .iter()
        .zip(0..)
        .map(|(def, order)| ProjectStatus {
            id: def.id.to_string(),
            name: def.name.to_string(),
            color: def.color.to_string(),
            order,
        })
        .collect()
}

/// Statuses for a project-type label. Unknown labels get the `General` set.
pub fn lookup(project_type: &str) -> Vec<ProjectStatus> {
    statuses_for(ProjectType::from_label(project_type))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn every_type_has_gapless_orders() {
        for project_type in ProjectType::ALL {
            let statuses = lookup(project_type.label());
            assert!(!statuses.is_empty(), "{project_type} has no statuses");
            let orders: Vec<i32> = statuses.iter().map(|s| s.order).collect();
            let expected: Vec<i32> = (0..statuses.len() as i32).collect();
            assert_eq!(orders, expected, "{project_type} orders have gaps");
        }
    }

    #[test]
    fn every_type_has_three_to_five_statuses() {
        for project_type in ProjectType::ALL {
            let len = statuses_for(project_type).len();
            assert!((3..=5).contains(&len), "{project_type} has {len} statuses");
        }
    }

    #[test]
    fn status_ids_are_unique_per_type() {
        for project_type in ProjectType::ALL {
            let statuses = statuses_for(project_type);
            let ids: HashSet<&str> = statuses.iter().map(|s| s.id.as_str()).collect();
            assert_eq!(ids.len(), statuses.len(), "{project_type} repeats an id");
        }
    }

    #[test]
    fn unknown_label_falls_back_to_general() {
        assert_eq!(lookup("anything-unrecognized"), lookup("General"));
        assert_eq!(lookup(""), lookup("General"));
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(ProjectType::parse("marketing"), None);
        assert_eq!(lookup("marketing"), lookup("General"));
    }

    #[test]
    fn label_round_trips_through_parse() {
        for project_type in ProjectType::ALL {
            assert_eq!(ProjectType::parse(project_type.label()), Some(project_type));
        }
    }

    #[test]
    fn software_development_starts_with_por_hacer() {
        let statuses = lookup("Desarrollo de Software");
        assert_eq!(statuses.len(), 5);
        assert_eq!(statuses[0].id, "POR_HACER");
        assert_eq!(statuses[0].name, "Por Hacer");
        assert_eq!(statuses[4].id, "COMPLETADO");
    }

    #[test]
    fn design_label_uses_accent() {
        assert_eq!(ProjectType::from_label("Diseño"), ProjectType::Design);
        assert_eq!(ProjectType::from_label("Diseno"), ProjectType::General);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_value(ProjectType::SoftwareDevelopment).unwrap();
        assert_eq!(json, "Desarrollo de Software");
    }
}
