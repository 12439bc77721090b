//! Repository for `curriculum_knowledge_blocks`: the per-curriculum links
//! to catalog knowledge blocks.
//!
//! Every method is scoped by `curriculum_id` so a link id from another
//! curriculum never matches.

use curricula_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::curriculum_knowledge_block::{
    CreateCurriculumKnowledgeBlock, CurriculumKnowledgeBlock, KnowledgeBlockLinkDetail,
    UpdateCurriculumKnowledgeBlock,
};
use crate::models::knowledge_block::KnowledgeBlockSummary;

const COLUMNS: &str =
    "id, curriculum_id, knowledge_block_id, required_credits, sort_order, created_at, updated_at";

/// Link row joined with its catalog block.
#[derive(FromRow)]
struct LinkDetailRow {
    #[sqlx(flatten)]
    link: CurriculumKnowledgeBlock,
    block_code: String,
    block_name: String,
}

/// Provides CRUD operations for curriculum knowledge-block links.
pub struct CurriculumKnowledgeBlockRepo;

impl CurriculumKnowledgeBlockRepo {
    /// Attach a knowledge block to a curriculum.
    ///
    /// Without an explicit order the link is appended after the current
    /// last one.
    pub async fn create(
        pool: &PgPool,
        curriculum_id: DbId,
        input: &CreateCurriculumKnowledgeBlock,
    ) -> Result<CurriculumKnowledgeBlock, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_knowledge_blocks
                (curriculum_id, knowledge_block_id, required_credits, sort_order)
             VALUES ($1, $2, COALESCE($3, 0), COALESCE($4, (
                SELECT COALESCE(MAX(sort_order), 0) + 1
                FROM curriculum_knowledge_blocks WHERE curriculum_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumKnowledgeBlock>(&query)
            .bind(curriculum_id)
            .bind(input.knowledge_block_id)
            .bind(input.required_credits)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        curriculum_id: DbId,
        link_id: DbId,
    ) -> Result<Option<CurriculumKnowledgeBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM curriculum_knowledge_blocks
             WHERE id = $1 AND curriculum_id = $2"
        );
        sqlx::query_as::<_, CurriculumKnowledgeBlock>(&query)
            .bind(link_id)
            .bind(curriculum_id)
            .fetch_optional(pool)
            .await
    }

    /// Links of a curriculum ordered by `(sort_order, id)`.
    pub async fn list_by_curriculum(
        conn: &mut PgConnection,
        curriculum_id: DbId,
    ) -> Result<Vec<CurriculumKnowledgeBlock>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM curriculum_knowledge_blocks
             WHERE curriculum_id = $1
             ORDER BY sort_order, id"
        );
        sqlx::query_as::<_, CurriculumKnowledgeBlock>(&query)
            .bind(curriculum_id)
            .fetch_all(conn)
            .await
    }

    /// Links with their catalog block, ordered by `(sort_order, id)`.
    ///
    /// The `subjects` of each detail are left empty for the caller to fill.
    pub async fn list_details(
        conn: &mut PgConnection,
        curriculum_id: DbId,
    ) -> Result<Vec<KnowledgeBlockLinkDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, LinkDetailRow>(
            "SELECT l.id, l.curriculum_id, l.knowledge_block_id, l.required_credits,
                    l.sort_order, l.created_at, l.updated_at,
                    kb.code AS block_code, kb.name AS block_name
             FROM curriculum_knowledge_blocks l
             JOIN knowledge_blocks kb ON kb.id = l.knowledge_block_id
             WHERE l.curriculum_id = $1
             ORDER BY l.sort_order, l.id",
        )
        .bind(curriculum_id)
        .fetch_all(conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| KnowledgeBlockLinkDetail {
                knowledge_block: KnowledgeBlockSummary {
                    id: row.link.knowledge_block_id,
                    code: row.block_code,
                    name: row.block_name,
                },
                link: row.link,
                subjects: Vec::new(),
            })
            .collect())
    }

    pub async fn update(
        pool: &PgPool,
        curriculum_id: DbId,
        link_id: DbId,
        input: &UpdateCurriculumKnowledgeBlock,
    ) -> Result<Option<CurriculumKnowledgeBlock>, sqlx::Error> {
        let query = format!(
            "UPDATE curriculum_knowledge_blocks SET
                knowledge_block_id = COALESCE($3, knowledge_block_id),
                required_credits = COALESCE($4, required_credits),
                sort_order = COALESCE($5, sort_order)
             WHERE id = $1 AND curriculum_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumKnowledgeBlock>(&query)
            .bind(link_id)
            .bind(curriculum_id)
            .bind(input.knowledge_block_id)
            .bind(input.required_credits)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Remove a link. Subjects placed under it become unassigned.
    pub async fn delete(
        pool: &PgPool,
        curriculum_id: DbId,
        link_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "DELETE FROM curriculum_knowledge_blocks WHERE id = $1 AND curriculum_id = $2",
        )
        .bind(link_id)
        .bind(curriculum_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }
}
