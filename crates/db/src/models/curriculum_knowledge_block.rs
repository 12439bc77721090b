//! Knowledge-block link model and DTOs (`curriculum_knowledge_blocks`).
//!
//! A link places a catalog knowledge block into one curriculum with a
//! required-credit target and a display order.

use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use super::curriculum_subject::CurriculumSubjectDetail;
use super::knowledge_block::KnowledgeBlockSummary;

/// A row from the `curriculum_knowledge_blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumKnowledgeBlock {
    pub id: DbId,
    pub curriculum_id: DbId,
    pub knowledge_block_id: DbId,
    pub required_credits: i32,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A link enriched with its knowledge block and the subjects placed under it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBlockLinkDetail {
    #[serde(flatten)]
    pub link: CurriculumKnowledgeBlock,
    pub knowledge_block: KnowledgeBlockSummary,
    pub subjects: Vec<CurriculumSubjectDetail>,
}

/// DTO for adding a knowledge block to a curriculum.
///
/// When `order` is omitted the link is appended after the current last one.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateCurriculumKnowledgeBlock {
    pub knowledge_block_id: DbId,
    #[validate(range(min = 0, max = 500))]
    pub required_credits: Option<i32>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}

/// DTO for updating a knowledge-block link. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCurriculumKnowledgeBlock {
    pub knowledge_block_id: Option<DbId>,
    #[validate(range(min = 0, max = 500))]
    pub required_credits: Option<i32>,
    #[serde(rename = "order")]
    pub sort_order: Option<i32>,
}
