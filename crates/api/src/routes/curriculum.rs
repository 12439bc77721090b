//! Route definitions for the `/curricula` resource.
//!
//! Also nests the curriculum's knowledge-block links and subject
//! assignments under `/curricula/{id}/...`.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{
    curriculum, curriculum_copy, curriculum_knowledge_block, curriculum_subject,
};
use crate::state::AppState;

/// Routes mounted at `/curricula`.
///
/// ```text
/// GET    /                                      -> list
/// POST   /                                      -> create
/// GET    /{id}                                  -> get_by_id (detail view)
/// PUT    /{id}                                  -> update
/// DELETE /{id}                                  -> delete
/// POST   /{id}/status                           -> transition_status
/// GET    /{id}/summary                          -> credit_summary
/// POST   /{id}/copy                             -> copy
///
/// GET    /{id}/knowledge-blocks                 -> list
/// POST   /{id}/knowledge-blocks                 -> create
/// PUT    /{id}/knowledge-blocks/{link_id}       -> update
/// DELETE /{id}/knowledge-blocks/{link_id}       -> delete
///
/// GET    /{id}/subjects                         -> list
/// POST   /{id}/subjects                         -> create
/// PUT    /{id}/subjects/{assignment_id}         -> update
/// DELETE /{id}/subjects/{assignment_id}         -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(curriculum::list).post(curriculum::create))
        .route(
            "/{id}",
            get(curriculum::get_by_id)
                .put(curriculum::update)
                .delete(curriculum::delete),
        )
        .route("/{id}/status", post(curriculum::transition_status))
        .route("/{id}/summary", get(curriculum::credit_summary))
        .route("/{id}/copy", post(curriculum_copy::copy))
        .route(
            "/{id}/knowledge-blocks",
            get(curriculum_knowledge_block::list).post(curriculum_knowledge_block::create),
        )
        .route(
            "/{id}/knowledge-blocks/{link_id}",
            put(curriculum_knowledge_block::update).delete(curriculum_knowledge_block::delete),
        )
        .route(
            "/{id}/subjects",
            get(curriculum_subject::list).post(curriculum_subject::create),
        )
        .route(
            "/{id}/subjects/{assignment_id}",
            put(curriculum_subject::update).delete(curriculum_subject::delete),
        )
}
