//! PostgreSQL implementation of the curriculum copy store.
//!
//! Reads use a repeatable-read snapshot so the copied graph is consistent.
//! Writes go through one `sqlx` transaction; dropping a
//! [`PgCopyTransaction`] without committing rolls it back.

use async_trait::async_trait;
use curricula_core::curriculum_copy::store::{
    NewAssignmentRow, NewCurriculumRow, NewLinkRow, SourceAssignment, SourceCurriculum,
    SourceLink,
};
use curricula_core::curriculum_copy::{CopyTransaction, CurriculumCopyStore, CurriculumSnapshot};
use curricula_core::error::CoreError;
use curricula_core::types::DbId;
use sqlx::{PgPool, Postgres, Transaction};

use crate::error::to_core_error;
use crate::repositories::{
    begin_snapshot, CurriculumKnowledgeBlockRepo, CurriculumRepo, CurriculumSubjectRepo,
};

/// Copy store backed by a connection pool.
#[derive(Clone)]
pub struct PgCurriculumCopyStore {
    pool: PgPool,
}

impl PgCurriculumCopyStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn read_snapshot(&self, id: DbId) -> Result<Option<CurriculumSnapshot>, sqlx::Error> {
        let mut tx = begin_snapshot(&self.pool).await?;

        let Some(row) = CurriculumRepo::find_in(&mut *tx, id).await? else {
            return Ok(None);
        };
        let links = CurriculumKnowledgeBlockRepo::list_by_curriculum(&mut *tx, id).await?;
        let assignments = CurriculumSubjectRepo::list_details(&mut *tx, id).await?;
        tx.commit().await?;

        let mut snapshot = CurriculumSnapshot {
            curriculum: SourceCurriculum {
                id: row.id,
                code: row.code,
                name: row.name,
                major_id: row.major_id,
                description: row.description,
                version: row.version,
                academic_year: row.academic_year,
                total_credits: row.total_credits,
                duration: row.duration,
                level: row.level,
                status: row.status,
            },
            links: links
                .into_iter()
                .map(|l| SourceLink {
                    id: l.id,
                    knowledge_block_id: l.knowledge_block_id,
                    required_credits: l.required_credits,
                    order: l.sort_order,
                })
                .collect(),
            assignments: assignments
                .into_iter()
                .map(|d| SourceAssignment {
                    id: d.assignment.id,
                    subject_id: d.assignment.subject_id,
                    subject_code: d.subject.code,
                    link_id: d.assignment.curriculum_knowledge_block_id,
                    subject_type: d.assignment.subject_type,
                    credits: d.assignment.credits,
                    semester: d.assignment.semester,
                    prerequisite: d.assignment.prerequisite,
                    co_requisite: d.assignment.co_requisite,
                    order: d.assignment.sort_order,
                })
                .collect(),
        };
        snapshot.normalize();
        Ok(Some(snapshot))
    }
}

#[async_trait]
impl CurriculumCopyStore for PgCurriculumCopyStore {
    type Tx = PgCopyTransaction;

    async fn load_snapshot(
        &self,
        curriculum_id: DbId,
    ) -> Result<Option<CurriculumSnapshot>, CoreError> {
        self.read_snapshot(curriculum_id)
            .await
            .map_err(to_core_error)
    }

    async fn code_exists(&self, major_id: DbId, code: &str) -> Result<bool, CoreError> {
        let mut conn = self.pool.acquire().await.map_err(to_core_error)?;
        CurriculumRepo::code_exists(&mut conn, major_id, code)
            .await
            .map_err(to_core_error)
    }

    async fn begin(&self) -> Result<Self::Tx, CoreError> {
        let tx = self.pool.begin().await.map_err(to_core_error)?;
        Ok(PgCopyTransaction { tx })
    }
}

/// Write side of one copy invocation.
pub struct PgCopyTransaction {
    tx: Transaction<'static, Postgres>,
}

#[async_trait]
impl CopyTransaction for PgCopyTransaction {
    async fn insert_curriculum(&mut self, row: &NewCurriculumRow) -> Result<DbId, CoreError> {
        let id = sqlx::query_scalar::<_, DbId>(
            "INSERT INTO curricula
                (major_id, code, name, description, version, academic_year,
                 total_credits, duration, level, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(row.major_id)
        .bind(&row.code)
        .bind(&row.name)
        .bind(&row.description)
        .bind(&row.version)
        .bind(&row.academic_year)
        .bind(row.total_credits)
        .bind(row.duration)
        .bind(&row.level)
        .bind(&row.status)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(to_core_error)?;
        tracing::debug!(curriculum_id = id, code = %row.code, "Inserted curriculum copy");
        Ok(id)
    }

    async fn insert_link(&mut self, row: &NewLinkRow) -> Result<DbId, CoreError> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO curriculum_knowledge_blocks
                (curriculum_id, knowledge_block_id, required_credits, sort_order)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(row.curriculum_id)
        .bind(row.knowledge_block_id)
        .bind(row.required_credits)
        .bind(row.order)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(to_core_error)
    }

    async fn insert_assignment(&mut self, row: &NewAssignmentRow) -> Result<DbId, CoreError> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO curriculum_subjects
                (curriculum_id, subject_id, curriculum_knowledge_block_id, subject_type,
                 credits, semester, prerequisite, co_requisite, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING id",
        )
        .bind(row.curriculum_id)
        .bind(row.subject_id)
        .bind(row.link_id)
        .bind(&row.subject_type)
        .bind(row.credits)
        .bind(row.semester)
        .bind(&row.prerequisite)
        .bind(&row.co_requisite)
        .bind(row.order)
        .fetch_one(&mut *self.tx)
        .await
        .map_err(to_core_error)
    }

    async fn commit(self) -> Result<(), CoreError> {
        self.tx.commit().await.map_err(to_core_error)
    }
}
