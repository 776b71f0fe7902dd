pub mod catalog;
pub mod project;
pub mod project_config;
pub mod status_template;
