//! Handler for `POST /api/v1/curricula/{id}/copy`.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use curricula_core::curriculum_copy::{
    copy_curriculum, CopyCurriculumCommand, CopyCurriculumRequest,
};
use curricula_core::error::CoreError;
use curricula_core::types::DbId;
use curricula_db::copy_store::PgCurriculumCopyStore;
use curricula_db::repositories::CurriculumRepo;

use crate::error::{AppError, AppResult};
use crate::extract::extract_json;
use crate::response::CopyCurriculumResponse;
use crate::state::AppState;

/// Clone a curriculum with its knowledge-block links and subject
/// assignments under a new code and academic year.
///
/// The copy is a `Draft` at version `1.0` in the source's major. Nothing is
/// persisted unless every row is written.
pub async fn copy(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    body: Result<Json<CopyCurriculumRequest>, JsonRejection>,
) -> AppResult<(StatusCode, Json<CopyCurriculumResponse>)> {
    let command = CopyCurriculumCommand::try_from(extract_json(body)?)?;
    let store = PgCurriculumCopyStore::new(state.pool.clone());

    let outcome = copy_curriculum(&store, id, &command)
        .await
        .inspect_err(|err| match err {
            CoreError::Internal(_) => {}
            other => tracing::info!(source_id = id, error = %other, "Curriculum copy rejected"),
        })?;
    tracing::info!(
        source_id = outcome.source_id,
        curriculum_id = outcome.curriculum_id,
        code = %command.new_code,
        links = outcome.knowledge_block_links,
        subjects = outcome.subject_assignments,
        "Curriculum copied"
    );

    let curriculum = CurriculumRepo::find_detail(&state.pool, outcome.curriculum_id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!(
                "copied curriculum {} vanished before it could be read",
                outcome.curriculum_id
            ))
        })?;

    Ok((
        StatusCode::CREATED,
        Json(CopyCurriculumResponse {
            message: format!("Curriculum copied successfully as '{}'", command.new_code),
            curriculum,
        }),
    ))
}
