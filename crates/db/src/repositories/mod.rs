//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` (or any Postgres executor) as the first argument.

pub mod project_config_repo;
pub mod project_repo;
pub mod status_template_repo;

pub use project_config_repo::ProjectConfigRepo;
pub use project_repo::ProjectRepo;
pub use status_template_repo::StatusTemplateRepo;
