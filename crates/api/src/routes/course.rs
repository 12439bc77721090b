//! Route definitions for the `/courses` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/courses`.
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
        .route("/", get(course::list).post(course::create))
        .route(
            "/{id}",
            get(course::get_by_id).put(course::update).delete(course::delete),
        )
}
