//! Curriculum entity model, DTOs, and nested detail view.
//!
//! A curriculum belongs to one major and is unique per `(major_id, code)`.
//! It owns an ordered list of knowledge-block links and a set of subject
//! assignments; deleting it cascades to both.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::curriculum_knowledge_block::KnowledgeBlockLinkDetail;
use super::curriculum_subject::CurriculumSubjectDetail;
use super::major::MajorSummary;

/// A row from the `curricula` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Curriculum {
    pub id: DbId,
    pub major_id: DbId,
    pub code: String,
    pub name: String,
    pub description: Option<String>,
    pub version: String,
    pub academic_year: String,
    pub total_credits: Option<i32>,
    pub duration: Option<f64>,
    pub level: Option<String>,
    pub status: String,
    pub approved_by: Option<String>,
    pub approved_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A curriculum with its major, knowledge-block links (each with its
/// subjects) and the flat list of subject assignments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumDetail {
    #[serde(flatten)]
    pub curriculum: Curriculum,
    pub major: MajorSummary,
    pub knowledge_blocks: Vec<KnowledgeBlockLinkDetail>,
    pub subjects: Vec<CurriculumSubjectDetail>,
}

/// DTO for creating a new curriculum.
///
/// `version` defaults to `1.0` and `status` always starts at `Draft`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurriculum {
    pub major_id: DbId,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub version: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: String,
    #[validate(range(min = 0, max = 500))]
    pub total_credits: Option<i32>,
    #[validate(range(exclusive_min = 0.0, max = 10.0))]
    pub duration: Option<f64>,
    #[validate(length(max = 100))]
    pub level: Option<String>,
}

/// DTO for updating an existing curriculum. All fields are optional.
///
/// Status is not updatable here; it moves through
/// `POST /curricula/{id}/status` so transitions are checked.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurriculum {
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub version: Option<String>,
    #[validate(length(min = 1, max = 20))]
    pub academic_year: Option<String>,
    #[validate(range(min = 0, max = 500))]
    pub total_credits: Option<i32>,
    #[validate(range(exclusive_min = 0.0, max = 10.0))]
    pub duration: Option<f64>,
    #[validate(length(max = 100))]
    pub level: Option<String>,
}

/// DTO for `POST /curricula/{id}/status`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TransitionCurriculumStatus {
    #[validate(length(min = 1))]
    pub status: String,
    #[validate(length(max = 255))]
    pub approved_by: Option<String>,
}
