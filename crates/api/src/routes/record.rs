//! Route definitions for the `/records` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::record;
use crate::state::AppState;

/// Routes mounted at `/records`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(record::list).post(record::create))
        .route(
            "/{id}",
            get(record::get_by_id)
                .put(record::update)
                .delete(record::delete),
        )
}
