//! Route definitions for the `/faculties` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::faculty;
use crate::state::AppState;

/// Routes mounted at `/faculties`.
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
        .route("/", get(faculty::list).post(faculty::create))
        .route(
            "/{id}",
            get(faculty::get_by_id).put(faculty::update).delete(faculty::delete),
        )
}
