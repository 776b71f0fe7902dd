//! Conversion of human-readable status names into machine identifiers.
//!
//! Ids produced here are persisted inside project configs, so the
//! transformation must stay byte-for-byte stable: uppercase the whole name,
//! then collapse every whitespace run into a single `_`. Leading and
//! trailing runs are kept as underscores; nothing is trimmed.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

static WHITESPACE_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Normalize a status display name into a status id.
///
/// # Examples
///
/// ```
/// use tablero_core::status_name::normalize_status_name;
///
/// assert_eq!(normalize_status_name("Por Hacer"), "POR_HACER");
/// assert_eq!(normalize_status_name("a   b"), "A_B");
/// assert_eq!(normalize_status_name(" x "), "_X_");
/// ```
pub fn normalize_status_name(name: &str) -> String {
    let upper = name.to_uppercase();
    WHITESPACE_RUN_RE.replace_all(&upper, "_").into_owned()
}

/// A status id shared by two or more distinct display names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusIdCollision {
    pub status_id: String,
    pub names: Vec<String>,
}

/// Report every normalized id that more than one distinct name maps to.
///
/// Collisions are returned in the order their id was first produced, and
/// each collision lists its names in input order. Identical names repeated
/// verbatim are not a collision. Nothing is renamed; callers decide what to
/// do with the report.
pub fn find_status_id_collisions<'a, I>(names: I) -> Vec<StatusIdCollision>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut groups: Vec<StatusIdCollision> = Vec::new();

    for name in names {
        let status_id = normalize_status_name(name);
        match groups.iter_mut().find(|g| g.status_id == status_id) {
            Some(group) => {
                if !group.names.iter().any(|n| n == name) {
                    group.names.push(name.to_string());
                }
            }
            None => groups.push(StatusIdCollision {
                status_id,
                names: vec![name.to_string()],
            }),
        }
    }

    groups.retain(|g| g.names.len() > 1);
    groups
}
