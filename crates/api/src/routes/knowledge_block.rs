//! Route definitions for the `/knowledge-blocks` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::knowledge_block;
use crate::state::AppState;

/// Routes mounted at `/knowledge-blocks`.
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
        .route("/", get(knowledge_block::list).post(knowledge_block::create))
        .route(
            "/{id}",
            get(knowledge_block::get_by_id).put(knowledge_block::update).delete(knowledge_block::delete),
        )
}
