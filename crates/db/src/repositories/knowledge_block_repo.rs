//! Repository for the `knowledge_blocks` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::knowledge_block::{CreateKnowledgeBlock, KnowledgeBlock, UpdateKnowledgeBlock};

const COLUMNS: &str =
    "id, name, code, description, min_credits, max_credits, created_at, updated_at";

/// Provides CRUD operations for the knowledge-block catalog.
pub struct KnowledgeBlockRepo;

impl KnowledgeBlockRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateKnowledgeBlock,
    ) -> Result<KnowledgeBlock, sqlx::Error> {
        let query = format!(
            "INSERT INTO knowledge_blocks (name, code, description, min_credits, max_credits)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeBlock>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .bind(input.min_credits)
            .bind(input.max_credits)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<KnowledgeBlock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_blocks WHERE id = $1");
        sqlx::query_as::<_, KnowledgeBlock>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<KnowledgeBlock>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM knowledge_blocks ORDER BY code, id");
        sqlx::query_as::<_, KnowledgeBlock>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateKnowledgeBlock,
    ) -> Result<Option<KnowledgeBlock>, sqlx::Error> {
        let query = format!(
            "UPDATE knowledge_blocks SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                description = COALESCE($4, description),
                min_credits = COALESCE($5, min_credits),
                max_credits = COALESCE($6, max_credits)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, KnowledgeBlock>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .bind(input.min_credits)
            .bind(input.max_credits)
            .fetch_optional(pool)
            .await
    }

    /// Delete a knowledge block. Fails with a foreign-key violation while any
    /// curriculum still links it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM knowledge_blocks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
