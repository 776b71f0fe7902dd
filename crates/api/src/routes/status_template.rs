use axum::routing::get;
use axum::Router;

use crate::handlers::status_template;
use crate::state::AppState;

/// Routes mounted at `/status-templates`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(status_template::list).post(status_template::create))
        .route(
            "/{id}",
            get(status_template::get_by_id).delete(status_template::delete),
        )
}
