//! Project board configuration: statuses, grid columns, and view defaults.
//!
//! A [`ProjectConfig`] is derived once when a project is initialized, either
//! from the built-in template of its project type ([`default_config`]) or
//! from the states of a reusable status template ([`config_from_template`]).
//! Both derivations are total and perform no I/O apart from reading the
//! clock for `created_at` / `updated_at`.
//!
//! Configs are values: changing one means deriving a new config and
//! replacing the stored snapshot wholesale.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::grid_column::{default_columns, GridColumn};
use crate::status_name::normalize_status_name;
use crate::status_template::{lookup, statuses_for, ProjectStatus, ProjectType};
use crate::types::Timestamp;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Prefix of every config id; the project id follows it.
pub const CONFIG_ID_PREFIX: &str = "config-";

/// Maximum length of a project name.
pub const MAX_PROJECT_NAME_LENGTH: usize = 200;

/// Maximum length of a status template name.
pub const MAX_TEMPLATE_NAME_LENGTH: usize = 200;

/// Maximum number of states in one status template.
pub const MAX_TEMPLATE_STATES: usize = 20;

/// Maximum length of a single state name.
pub const MAX_STATE_NAME_LENGTH: usize = 100;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Which field the kanban board groups its lanes by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KanbanLayout {
    #[default]
    Status,
    Priority,
}

/// Which field the grid view groups rows by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridGroupBy {
    #[default]
    None,
    Status,
    Priority,
    Assignee,
}

/// One workflow stage as defined by a reusable status template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateState {
    pub id: i64,
    pub name: String,
    pub color: String,
    pub order: i32,
    #[serde(default)]
    pub is_default: bool,
}

/// A template state as submitted for a new template, before it has an id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewTemplateState {
    pub name: String,
    pub color: String,
    pub order: i32,
    #[serde(default)]
    pub is_default: bool,
}

/// Board configuration owned by exactly one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectConfig {
    pub id: String,
    pub project_id: String,
    pub statuses: Vec<ProjectStatus>,
    pub grid_columns: Vec<GridColumn>,
    pub kanban_layout: KanbanLayout,
    pub grid_group_by: GridGroupBy,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ProjectConfig {
    /// Statuses sorted by `order`. Equal orders keep their stored position.
    pub fn ordered_statuses(&self) -> Vec<&ProjectStatus> {
        let mut ordered: Vec<&ProjectStatus> = self.statuses.iter().collect();
        ordered.sort_by_key(|s| s.order);
        ordered
    }

    /// Find a status by id. With colliding ids the first stored one wins.
    pub fn status(&self, id: &str) -> Option<&ProjectStatus> {
        self.statuses.iter().find(|s| s.id == id)
    }
}

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// The id of the config belonging to `project_id`.
pub fn config_id(project_id: &str) -> String {
    format!("{CONFIG_ID_PREFIX}{project_id}")
}

fn assemble(project_id: &str, statuses: Vec<ProjectStatus>, now: Timestamp) -> ProjectConfig {
    ProjectConfig {
        id: config_id(project_id),
        project_id: project_id.to_string(),
        statuses,
        grid_columns: default_columns(),
        kanban_layout: KanbanLayout::Status,
        grid_group_by: GridGroupBy::None,
        created_at: now,
        updated_at: now,
    }
}

/// Derive a config from the built-in template of `project_type`.
///
/// Never fails: an unrecognized project type yields the `General` statuses.
pub fn default_config(project_id: &str, project_type: &str) -> ProjectConfig {
    assemble(project_id, lookup(project_type), chrono::Utc::now())
}

/// Convert a template state into a project status.
///
/// The id is the normalized state name; `order` is copied verbatim and the
/// `is_default` flag is not carried over.
pub fn status_from_template_state(state: &TemplateState) -> ProjectStatus {
    ProjectStatus {
        id: normalize_status_name(&state.name),
        name: state.name.clone(),
        color: state.color.clone(),
        order: state.order,
    }
}

/// Derive a config from the states of a reusable template.
///
/// States keep their input sequence; orders are neither re-sequenced nor
/// gap-filled. An empty state list yields the `General` statuses so the
/// config always has at least one status.
pub fn config_from_template(project_id: &str, template_states: &[TemplateState]) -> ProjectConfig {
    let statuses = if template_states.is_empty() {
        statuses_for(ProjectType::General)
    } else {
        template_states.iter().map(status_from_template_state).collect()
    };
    assemble(project_id, statuses, chrono::Utc::now())
}

// ---------------------------------------------------------------------------
// Boundary validation
// ---------------------------------------------------------------------------

fn validate_name(kind: &str, name: &str, max_len: usize) -> Result<(), CoreError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation(format!("{kind} must not be empty")));
    }
    if trimmed.chars().count() > max_len {
        return Err(CoreError::Validation(format!(
            "{kind} exceeds maximum length of {max_len} characters"
        )));
    }
    Ok(())
}

/// Validate a project name: non-blank and within the length limit.
pub fn validate_project_name(name: &str) -> Result<(), CoreError> {
    validate_name("Project name", name, MAX_PROJECT_NAME_LENGTH)
}

/// Validate a status template name: non-blank and within the length limit.
pub fn validate_template_name(name: &str) -> Result<(), CoreError> {
    validate_name("Template name", name, MAX_TEMPLATE_NAME_LENGTH)
}

/// Validate the states submitted for a new status template.
///
/// Rejects an empty list, too many states, and states with a blank name or
/// color. Duplicate orders and colliding names are accepted.
pub fn validate_template_states(states: &[NewTemplateState]) -> Result<(), CoreError> {
    if states.is_empty() {
        return Err(CoreError::Validation(
            "A status template needs at least one state".to_string(),
        ));
    }
    if states.len() > MAX_TEMPLATE_STATES {
        return Err(CoreError::Validation(format!(
            "Template has {} states, maximum is {MAX_TEMPLATE_STATES}",
            states.len()
        )));
    }
    for (position, state) in states.iter().enumerate() {
        validate_name(
            &format!("State name at position {position}"),
            &state.name,
            MAX_STATE_NAME_LENGTH,
        )?;
        if state.color.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "State '{}' must have a color",
                state.name
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn state(id: i64, name: &str, order: i32) -> TemplateState {
        TemplateState {
            id,
            name: name.to_string(),
            color: format!("c{id}"),
            order,
            is_default: false,
        }
    }

    fn new_state(name: &str, order: i32) -> NewTemplateState {
        NewTemplateState {
            name: name.to_string(),
            color: "bg-slate-500".to_string(),
            order,
            is_default: false,
        }
    }

    /// Compare two configs ignoring the clock-derived fields.
    fn same_shape(a: &ProjectConfig, b: &ProjectConfig) -> bool {
        a.id == b.id
            && a.project_id == b.project_id
            && a.statuses == b.statuses
            && a.grid_columns == b.grid_columns
            && a.kanban_layout == b.kanban_layout
            && a.grid_group_by == b.grid_group_by
    }

    // -- default_config -----------------------------------------------------

    #[test]
    fn config_id_is_prefixed_project_id() {
        for (pid, project_type) in [("p1", "Marketing"), ("42", "General"), ("", "nope")] {
            assert_eq!(default_config(pid, project_type).id, format!("config-{pid}"));
        }
    }

    #[test]
    fn default_config_uses_type_statuses() {
        let config = default_config("p1", "Marketing");
        assert_eq!(config.project_id, "p1");
        assert_eq!(config.statuses, lookup("Marketing"));
    }

    #[test]
    fn default_config_unknown_type_is_general() {
        let config = default_config("p1", "Astronomía");
        assert_eq!(config.statuses, lookup("General"));
    }

    #[test]
    fn default_config_layout_defaults() {
        let config = default_config("p1", "Diseño");
        assert_eq!(config.kanban_layout, KanbanLayout::Status);
        assert_eq!(config.grid_group_by, GridGroupBy::None);
        assert_eq!(config.created_at, config.updated_at);
    }

    #[test]
    fn grid_columns_are_always_the_default_set() {
        let expected = default_columns();
        assert_eq!(default_config("p1", "Marketing").grid_columns, expected);
        assert_eq!(default_config("p2", "unknown").grid_columns, expected);
        assert_eq!(config_from_template("p3", &[state(1, "A", 0)]).grid_columns, expected);
        assert_eq!(config_from_template("p4", &[]).grid_columns, expected);
    }

    #[test]
    fn default_config_is_repeatable_apart_from_timestamps() {
        let first = default_config("p1", "Desarrollo de Software");
        let second = default_config("p1", "Desarrollo de Software");
        assert!(same_shape(&first, &second));
    }

    #[test]
    fn marketing_orders_match_positions() {
        let config = default_config("p1", "Marketing");
        for (position, status) in config.statuses.iter().enumerate() {
            assert_eq!(status.order, position as i32);
        }
        let ordered_ids: Vec<&str> = config
            .ordered_statuses()
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        let stored_ids: Vec<&str> = config.statuses.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ordered_ids, stored_ids);
    }

    // -- config_from_template -----------------------------------------------

    #[test]
    fn template_state_becomes_status() {
        let states = vec![TemplateState {
            id: 1,
            name: "Por Hacer".to_string(),
            color: "c1".to_string(),
            order: 0,
            is_default: true,
        }];
        let config = config_from_template("p1", &states);
        assert_eq!(
            config.statuses,
            vec![ProjectStatus {
                id: "POR_HACER".to_string(),
                name: "Por Hacer".to_string(),
                color: "c1".to_string(),
                order: 0,
            }]
        );
        assert_eq!(config.id, "config-p1");
    }

    #[test]
    fn template_orders_are_copied_verbatim() {
        let states = vec![state(1, "Alpha", 10), state(2, "Beta", 3), state(3, "Gamma", 7)];
        let config = config_from_template("p1", &states);
        let orders: Vec<i32> = config.statuses.iter().map(|s| s.order).collect();
        assert_eq!(orders, vec![10, 3, 7]);
    }

    #[test]
    fn empty_template_falls_back_to_general() {
        let config = config_from_template("p1", &[]);
        assert_eq!(config.statuses, lookup("General"));
    }

    #[test]
    fn colliding_names_are_kept_as_is() {
        let states = vec![state(1, "To Do", 0), state(2, "TO DO", 1)];
        let config = config_from_template("p1", &states);
        assert_eq!(config.statuses.len(), 2);
        assert!(config.statuses.iter().all(|s| s.id == "TO_DO"));
        assert_eq!(config.status("TO_DO").unwrap().name, "To Do");
    }

    // -- ordered_statuses ---------------------------------------------------

    #[test]
    fn ordered_statuses_sorts_by_order() {
        let states = vec![state(1, "Alpha", 2), state(2, "Beta", 0), state(3, "Gamma", 1)];
        let config = config_from_template("p1", &states);
        let names: Vec<&str> = config.ordered_statuses().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Gamma", "Alpha"]);
    }

    #[test]
    fn ordered_statuses_ties_keep_input_position() {
        let states = vec![state(1, "Alpha", 1), state(2, "Beta", 0), state(3, "Gamma", 1)];
        let config = config_from_template("p1", &states);
        let names: Vec<&str> = config.ordered_statuses().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Beta", "Alpha", "Gamma"]);
    }

    // -- serialization ------------------------------------------------------

    #[test]
    fn config_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(default_config("p1", "General")).unwrap();
        assert_eq!(json["id"], "config-p1");
        assert_eq!(json["projectId"], "p1");
        assert_eq!(json["kanbanLayout"], "status");
        assert_eq!(json["gridGroupBy"], "none");
        assert!(json["gridColumns"].is_array());
        assert!(json["createdAt"].is_string());
    }

    #[test]
    fn config_survives_json_storage() {
        let config = config_from_template("p9", &[state(1, "En Curso", 4)]);
        let stored = serde_json::to_value(&config).unwrap();
        let restored: ProjectConfig = serde_json::from_value(stored).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn template_state_accepts_camel_case_input() {
        let parsed: TemplateState = serde_json::from_value(serde_json::json!({
            "id": 3, "name": "Hecho", "color": "bg-green-500", "order": 2, "isDefault": true
        }))
        .unwrap();
        assert!(parsed.is_default);
        assert_eq!(parsed.order, 2);
    }

    // -- validation ---------------------------------------------------------

    #[test]
    fn project_name_rules() {
        assert!(validate_project_name("Lanzamiento Q3").is_ok());
        assert_matches!(validate_project_name("   "), Err(CoreError::Validation(_)));
        let long = "a".repeat(MAX_PROJECT_NAME_LENGTH + 1);
        assert_matches!(validate_project_name(&long), Err(CoreError::Validation(_)));
        let exact = "ñ".repeat(MAX_PROJECT_NAME_LENGTH);
        assert!(validate_project_name(&exact).is_ok());
    }

    #[test]
    fn template_name_rules() {
        assert!(validate_template_name("Kanban simple").is_ok());
        assert_matches!(validate_template_name(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn template_states_must_not_be_empty() {
        assert_matches!(validate_template_states(&[]), Err(CoreError::Validation(_)));
    }

    #[test]
    fn template_states_limit() {
        let states: Vec<NewTemplateState> = (0..=MAX_TEMPLATE_STATES as i32)
            .map(|i| new_state(&format!("s{i}"), i))
            .collect();
        assert_matches!(validate_template_states(&states), Err(CoreError::Validation(_)));
        assert!(validate_template_states(&states[..MAX_TEMPLATE_STATES]).is_ok());
    }

    #[test]
    fn template_state_needs_name_and_color() {
        assert_matches!(
            validate_template_states(&[new_state(" ", 0)]),
            Err(CoreError::Validation(_))
        );
        let mut colorless = new_state("Hecho", 0);
        colorless.color = String::new();
        assert_matches!(
            validate_template_states(&[colorless]),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn duplicate_orders_and_collisions_pass_validation() {
        let states = vec![new_state("To Do", 0), new_state("TO DO", 0)];
        assert!(validate_template_states(&states).is_ok());
    }
}
