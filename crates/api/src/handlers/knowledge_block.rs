//! Handlers for the `/knowledge-blocks` catalog.
//!
//! Besides the field rules on the DTOs, the credit range must be coherent:
//! `minCredits <= maxCredits`, checked against the merged row on update.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::catalog::validate_credit_range;
use curricula_core::types::DbId;
use curricula_db::models::knowledge_block::{
    CreateKnowledgeBlock, KnowledgeBlock, UpdateKnowledgeBlock,
};
use curricula_db::repositories::KnowledgeBlockRepo;

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/knowledge-blocks
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateKnowledgeBlock>,
) -> AppResult<(StatusCode, Json<DataResponse<KnowledgeBlock>>)> {
    validate_credit_range(input.min_credits, input.max_credits)?;
    let block = KnowledgeBlockRepo::create(&state.pool, &input).await?;
    tracing::info!(id = block.id, code = %block.code, "Knowledge block created");
    Ok((StatusCode::CREATED, Json(DataResponse { data: block })))
}

/// GET /api/v1/knowledge-blocks
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<KnowledgeBlock>>>> {
    let blocks = KnowledgeBlockRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: blocks }))
}

/// GET /api/v1/knowledge-blocks/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<KnowledgeBlock>>> {
    let block = KnowledgeBlockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("KnowledgeBlock", id))?;
    Ok(Json(DataResponse { data: block }))
}

/// PUT /api/v1/knowledge-blocks/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateKnowledgeBlock>,
) -> AppResult<Json<DataResponse<KnowledgeBlock>>> {
    let existing = KnowledgeBlockRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::not_found("KnowledgeBlock", id))?;
    validate_credit_range(
        input.min_credits.or(existing.min_credits),
        input.max_credits.or(existing.max_credits),
    )?;

    let block = KnowledgeBlockRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("KnowledgeBlock", id))?;
    Ok(Json(DataResponse { data: block }))
}

/// DELETE /api/v1/knowledge-blocks/{id}
///
/// Refused with `INVALID_REFERENCE` while a curriculum still links the block.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if KnowledgeBlockRepo::delete(&state.pool, id).await? {
        tracing::info!(id, "Knowledge block deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("KnowledgeBlock", id))
    }
}
