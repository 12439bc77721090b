//! Handlers for `/curricula/{id}/knowledge-blocks`: the knowledge blocks a
//! curriculum links, with their credit targets and order.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::types::DbId;
use curricula_db::models::curriculum_knowledge_block::{
    CreateCurriculumKnowledgeBlock, CurriculumKnowledgeBlock, KnowledgeBlockLinkDetail,
    UpdateCurriculumKnowledgeBlock,
};
use curricula_db::repositories::{CurriculumKnowledgeBlockRepo, CurriculumRepo};

use crate::error::{AppError, AppResult};
use crate::extract::ValidatedJson;
use crate::handlers::curriculum::ensure_curriculum;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/curricula/{id}/knowledge-blocks
///
/// Links in order, each with the subjects placed under it.
pub async fn list(
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<KnowledgeBlockLinkDetail>>>> {
    let detail = CurriculumRepo::find_detail(&state.pool, curriculum_id)
        .await?
        .ok_or_else(|| AppError::not_found("Curriculum", curriculum_id))?;
    Ok(Json(DataResponse {
        data: detail.knowledge_blocks,
    }))
}

/// POST /api/v1/curricula/{id}/knowledge-blocks
pub async fn create(
    State(state): State<AppState>,
    Path(curriculum_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateCurriculumKnowledgeBlock>,
) -> AppResult<(StatusCode, Json<DataResponse<CurriculumKnowledgeBlock>>)> {
    ensure_curriculum(&state, curriculum_id).await?;
    let link = CurriculumKnowledgeBlockRepo::create(&state.pool, curriculum_id, &input).await?;
    tracing::info!(
        curriculum_id,
        link_id = link.id,
        knowledge_block_id = link.knowledge_block_id,
        "Knowledge block linked"
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: link })))
}

/// PUT /api/v1/curricula/{id}/knowledge-blocks/{link_id}
pub async fn update(
    State(state): State<AppState>,
    Path((curriculum_id, link_id)): Path<(DbId, DbId)>,
    ValidatedJson(input): ValidatedJson<UpdateCurriculumKnowledgeBlock>,
) -> AppResult<Json<DataResponse<CurriculumKnowledgeBlock>>> {
    let link = CurriculumKnowledgeBlockRepo::update(&state.pool, curriculum_id, link_id, &input)
        .await?
        .ok_or_else(|| AppError::not_found("CurriculumKnowledgeBlock", link_id))?;
    Ok(Json(DataResponse { data: link }))
}

/// DELETE /api/v1/curricula/{id}/knowledge-blocks/{link_id}
///
/// Subjects under the link stay in the curriculum, unassigned.
pub async fn delete(
    State(state): State<AppState>,
    Path((curriculum_id, link_id)): Path<(DbId, DbId)>,
) -> AppResult<StatusCode> {
    if CurriculumKnowledgeBlockRepo::delete(&state.pool, curriculum_id, link_id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::not_found("CurriculumKnowledgeBlock", link_id))
    }
}
