//! Route definitions for the `/universities` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::university;
use crate::state::AppState;

/// Routes mounted at `/universities`.
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
        .route("/", get(university::list).post(university::create))
        .route(
            "/{id}",
            get(university::get_by_id).put(university::update).delete(university::delete),
        )
}
