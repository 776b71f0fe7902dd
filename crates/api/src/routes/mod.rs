pub mod catalog;
pub mod health;
pub mod project;
pub mod status_template;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                          list, create
/// /projects/{id}                     get, update, delete
/// /projects/{id}/config              get, replace (PUT)
///
/// /status-templates                  list, create
/// /status-templates/{id}             get (with states), delete
///
/// /project-types                     built-in types and their statuses
/// /grid-columns                      default and available grid columns
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/status-templates", status_template::router())
        .merge(catalog::router())
}
