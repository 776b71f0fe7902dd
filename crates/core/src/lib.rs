//! Domain logic for Tablero project boards.
//!
//! Everything in this crate is synchronous and free of I/O. The status
//! template table, grid column catalog, and config derivation functions are
//! total: they never fail on caller input. Fallible checks used by request
//! boundaries live in [`project_config`] as `validate_*` helpers.

pub mod error;
pub mod grid_column;
pub mod project_config;
pub mod status_name;
pub mod status_template;
pub mod types;
