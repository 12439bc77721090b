//! Route definitions for the `/majors` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::major;
use crate::state::AppState;

/// Routes mounted at `/majors`.
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
        .route("/", get(major::list).post(major::create))
        .route(
            "/{id}",
            get(major::get_by_id).put(major::update).delete(major::delete),
        )
}
