//! Repository for the `curricula` table and the assembled curriculum view.

use std::collections::HashMap;

use curricula_core::curriculum::{
    AssignmentCredits, LinkCredits, INITIAL_VERSION, STATUS_APPROVED, STATUS_DRAFT,
};
use curricula_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::curriculum::{
    CreateCurriculum, Curriculum, CurriculumDetail, UpdateCurriculum,
};
use crate::repositories::{
    begin_snapshot, CurriculumKnowledgeBlockRepo, CurriculumSubjectRepo, MajorRepo,
};

const COLUMNS: &str = "id, major_id, code, name, description, version, academic_year, \
                       total_credits, duration, level, status, approved_by, approved_at, \
                       created_at, updated_at";

/// Provides CRUD operations for curricula.
pub struct CurriculumRepo;

impl CurriculumRepo {
    /// Insert a new curriculum. It starts in `Draft`; version defaults to
    /// `1.0`.
    pub async fn create(pool: &PgPool, input: &CreateCurriculum) -> Result<Curriculum, sqlx::Error> {
        let query = format!(
            "INSERT INTO curricula
                (major_id, code, name, description, version, academic_year,
                 total_credits, duration, level)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(input.major_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(input.version.as_deref().unwrap_or(INITIAL_VERSION))
            .bind(&input.academic_year)
            .bind(input.total_credits)
            .bind(input.duration)
            .bind(&input.level)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Curriculum>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        Self::find_in(&mut conn, id).await
    }

    pub(crate) async fn find_in(conn: &mut PgConnection, id: DbId) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM curricula WHERE id = $1");
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(id)
            .fetch_optional(conn)
            .await
    }

    /// List curricula, optionally filtered by major and/or status.
    pub async fn list(
        pool: &PgPool,
        major_id: Option<DbId>,
        status: Option<&str>,
    ) -> Result<Vec<Curriculum>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM curricula
             WHERE ($1::BIGINT IS NULL OR major_id = $1)
               AND ($2::TEXT IS NULL OR status = $2)
             ORDER BY academic_year DESC, code, id"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(major_id)
            .bind(status)
            .fetch_all(pool)
            .await
    }

    /// Whether `code` is taken within `major_id`.
    pub async fn code_exists(
        conn: &mut PgConnection,
        major_id: DbId,
        code: &str,
    ) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM curricula WHERE major_id = $1 AND code = $2)",
        )
        .bind(major_id)
        .bind(code)
        .fetch_one(conn)
        .await
    }

    /// Load a curriculum with its major, links and subject assignments.
    ///
    /// All reads run in one snapshot. Subjects appear both in the flat
    /// `subjects` list and under the link that owns them.
    pub async fn find_detail(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CurriculumDetail>, sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;

        let Some(curriculum) = Self::find_in(&mut *tx, id).await? else {
            return Ok(None);
        };
        let Some(major) = MajorRepo::find_summary(&mut *tx, curriculum.major_id).await? else {
            return Ok(None);
        };
        let mut knowledge_blocks = CurriculumKnowledgeBlockRepo::list_details(&mut *tx, id).await?;
        let subjects = CurriculumSubjectRepo::list_details(&mut *tx, id).await?;
        tx.commit().await?;

        let position: HashMap<DbId, usize> = knowledge_blocks
            .iter()
            .enumerate()
            .map(|(i, detail)| (detail.link.id, i))
            .collect();
        for subject in &subjects {
            let owner = subject
                .assignment
                .curriculum_knowledge_block_id
                .and_then(|link_id| position.get(&link_id));
            if let Some(&i) = owner {
                knowledge_blocks[i].subjects.push(subject.clone());
            }
        }

        Ok(Some(CurriculumDetail {
            curriculum,
            major,
            knowledge_blocks,
            subjects,
        }))
    }

    /// Inputs for the credit summary, read in one snapshot.
    pub async fn credit_inputs(
        pool: &PgPool,
        id: DbId,
    ) -> Result<(Vec<LinkCredits>, Vec<AssignmentCredits>), sqlx::Error> {
        let mut tx = begin_snapshot(pool).await?;
        let links = CurriculumKnowledgeBlockRepo::list_by_curriculum(&mut *tx, id)
            .await?
            .into_iter()
            .map(|link| LinkCredits {
                link_id: link.id,
                knowledge_block_id: link.knowledge_block_id,
                required_credits: link.required_credits,
            })
            .collect();
        let assignments = sqlx::query_as::<_, (Option<DbId>, i32)>(
            "SELECT curriculum_knowledge_block_id, credits FROM curriculum_subjects
             WHERE curriculum_id = $1
             ORDER BY sort_order, id",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?
        .into_iter()
        .map(|(link_id, credits)| AssignmentCredits { link_id, credits })
        .collect();
        tx.commit().await?;
        Ok((links, assignments))
    }

    /// Update a curriculum. Only non-`None` fields in `input` are applied.
    /// Status is changed through [`CurriculumRepo::set_status`].
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCurriculum,
    ) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!(
            "UPDATE curricula SET
                code = COALESCE($2, code),
                name = COALESCE($3, name),
                description = COALESCE($4, description),
                version = COALESCE($5, version),
                academic_year = COALESCE($6, academic_year),
                total_credits = COALESCE($7, total_credits),
                duration = COALESCE($8, duration),
                level = COALESCE($9, level)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .bind(&input.version)
            .bind(&input.academic_year)
            .bind(input.total_credits)
            .bind(input.duration)
            .bind(&input.level)
            .fetch_optional(pool)
            .await
    }

    /// Move a curriculum to `status`.
    ///
    /// Entering `Approved` records the approver and the approval time.
    /// Returning to `Draft` clears them. Other targets keep the existing
    /// approval record. The transition itself must be validated by the
    /// caller.
    pub async fn set_status(
        pool: &PgPool,
        id: DbId,
        status: &str,
        approved_by: Option<&str>,
    ) -> Result<Option<Curriculum>, sqlx::Error> {
        let query = format!(
            "UPDATE curricula SET
                status = $2,
                approved_by = CASE
                    WHEN $2 = $4 THEN $3
                    WHEN $2 = $5 THEN NULL
                    ELSE approved_by END,
                approved_at = CASE
                    WHEN $2 = $4 THEN NOW()
                    WHEN $2 = $5 THEN NULL
                    ELSE approved_at END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Curriculum>(&query)
            .bind(id)
            .bind(status)
            .bind(approved_by)
            .bind(STATUS_APPROVED)
            .bind(STATUS_DRAFT)
            .fetch_optional(pool)
            .await
    }

    /// Delete a curriculum with its links and assignments.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM curricula WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
