//! Route definitions for the `/schools` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::school;
use crate::state::AppState;

/// Routes mounted at `/schools`.
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
        .route("/", get(school::list).post(school::create))
        .route(
            "/{id}",
            get(school::get_by_id).put(school::update).delete(school::delete),
        )
}
