//! Knowledge block catalog entity model and DTOs.
//!
//! A knowledge block (e.g. "General Knowledge") is a shared category with an
//! optional credit range. Curricula link to blocks through
//! `curriculum_knowledge_blocks`.

use curricula_core::catalog::validate_code_format;
use curricula_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `knowledge_blocks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBlock {
    pub id: DbId,
    pub name: String,
    pub code: String,
    pub description: Option<String>,
    pub min_credits: Option<i32>,
    pub max_credits: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Identifying fields of a knowledge block, embedded in curriculum views.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeBlockSummary {
    pub id: DbId,
    pub code: String,
    pub name: String,
}

/// DTO for creating a new knowledge block.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateKnowledgeBlock {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: String,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub min_credits: Option<i32>,
    pub max_credits: Option<i32>,
}

/// DTO for updating an existing knowledge block. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateKnowledgeBlock {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 50), custom(function = "validate_code_format"))]
    pub code: Option<String>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
    pub min_credits: Option<i32>,
    pub max_credits: Option<i32>,
}
