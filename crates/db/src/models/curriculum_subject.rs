//! Subject assignment model and DTOs (`curriculum_subjects`).
//!
//! An assignment places one catalog subject into a curriculum, optionally
//! under one of that curriculum's knowledge-block links.

use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::subject::SubjectSummary;

/// A row from the `curriculum_subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumSubject {
    pub id: DbId,
    pub curriculum_id: DbId,
    pub subject_id: DbId,
    pub curriculum_knowledge_block_id: Option<DbId>,
    #[serde(rename = "type")]
    pub subject_type: String,
    pub credits: i32,
    pub semester: Option<i32>,
    pub prerequisite: Option<String>,
    pub co_requisite: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An assignment joined with its subject's identifying fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumSubjectDetail {
    #[serde(flatten)]
    pub assignment: CurriculumSubject,
    pub subject: SubjectSummary,
}

/// DTO for placing a subject into a curriculum.
///
/// `credits` defaults to the subject's catalog credits, `type` to
/// `Required`, and `order` to after the current last assignment.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurriculumSubject {
    pub subject_id: DbId,
    pub curriculum_knowledge_block_id: Option<DbId>,
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
    #[validate(range(min = 0, max = 30))]
    pub credits: Option<i32>,
    #[validate(range(min = 1, max = 20))]
    pub semester: Option<i32>,
    #[validate(length(max = 500))]
    pub prerequisite: Option<String>,
    #[validate(length(max = 500))]
    pub co_requisite: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for updating an assignment. All fields are optional.
///
/// `curriculumKnowledgeBlockId` is tri-state: absent leaves the link
/// unchanged, `null` detaches the subject, a number moves it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurriculumSubject {
    #[serde(default, deserialize_with = "double_option")]
    pub curriculum_knowledge_block_id: Option<Option<DbId>>,
    #[serde(rename = "type")]
    pub subject_type: Option<String>,
    #[validate(range(min = 0, max = 30))]
    pub credits: Option<i32>,
    #[validate(range(min = 1, max = 20))]
    pub semester: Option<i32>,
    #[validate(length(max = 500))]
    pub prerequisite: Option<String>,
    #[validate(length(max = 500))]
    pub co_requisite: Option<String>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// Deserialize a present field (including `null`) as `Some(..)`.
fn double_option<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
