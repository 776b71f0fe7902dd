use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, merged at the `/api/v1` root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/project-types", get(catalog::list_project_types))
        .route("/grid-columns", get(catalog::list_grid_columns))
}
