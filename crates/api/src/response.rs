//! Shared response envelope types for API handlers.
//!
//! Responses use a `{ "data": ... }` envelope. The copy endpoint is the
//! exception and answers with [`CopyCurriculumResponse`].

use curricula_db::models::curriculum::CurriculumDetail;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Body of a successful `POST /curricula/{id}/copy`.
#[derive(Debug, Serialize)]
pub struct CopyCurriculumResponse {
    pub message: String,
    pub curriculum: CurriculumDetail,
}
