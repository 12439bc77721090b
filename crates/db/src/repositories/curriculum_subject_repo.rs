//! Repository for `curriculum_subjects`: subjects placed into a
//! curriculum, optionally under one of its knowledge-block links.

use curricula_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::curriculum_subject::{
    CreateCurriculumSubject, CurriculumSubject, CurriculumSubjectDetail, UpdateCurriculumSubject,
};
use crate::models::subject::SubjectSummary;

const COLUMNS: &str = "id, curriculum_id, subject_id, curriculum_knowledge_block_id, \
                       subject_type, credits, semester, prerequisite, co_requisite, sort_order, \
                       created_at, updated_at";

/// Assignment row joined with its catalog subject.
#[derive(FromRow)]
struct AssignmentDetailRow {
    #[sqlx(flatten)]
    assignment: CurriculumSubject,
    subject_code: String,
    subject_name: String,
    subject_credits: i32,
}

/// Provides CRUD operations for curriculum subject assignments.
pub struct CurriculumSubjectRepo;

impl CurriculumSubjectRepo {
    /// Place a subject into a curriculum.
    ///
    /// `subject_type` must already be resolved by the caller. Credits
    /// default to the catalog subject's credits; order defaults to one past
    /// the current maximum.
    pub async fn create(
        pool: &PgPool,
        curriculum_id: DbId,
        subject_type: &str,
        input: &CreateCurriculumSubject,
    ) -> Result<CurriculumSubject, sqlx::Error> {
        let query = format!(
            "INSERT INTO curriculum_subjects
                (curriculum_id, subject_id, curriculum_knowledge_block_id, subject_type,
                 credits, semester, prerequisite, co_requisite, sort_order)
             VALUES ($1, $2, $3, $4,
                COALESCE($5, (SELECT credits FROM subjects WHERE id = $2)),
                $6, $7, $8,
                COALESCE($9, (
                    SELECT COALESCE(MAX(sort_order), 0) + 1
                    FROM curriculum_subjects WHERE curriculum_id = $1)))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumSubject>(&query)
            .bind(curriculum_id)
            .bind(input.subject_id)
            .bind(input.curriculum_knowledge_block_id)
            .bind(subject_type)
            .bind(input.credits)
            .bind(input.semester)
            .bind(&input.prerequisite)
            .bind(&input.co_requisite)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    pub async fn find(
        pool: &PgPool,
        curriculum_id: DbId,
        assignment_id: DbId,
    ) -> Result<Option<CurriculumSubject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM curriculum_subjects WHERE id = $1 AND curriculum_id = $2"
        );
        sqlx::query_as::<_, CurriculumSubject>(&query)
            .bind(assignment_id)
            .bind(curriculum_id)
            .fetch_optional(pool)
            .await
    }

    /// Assignments with their catalog subject, ordered by `(sort_order, id)`.
    pub async fn list_details(
        conn: &mut PgConnection,
        curriculum_id: DbId,
    ) -> Result<Vec<CurriculumSubjectDetail>, sqlx::Error> {
        let rows = sqlx::query_as::<_, AssignmentDetailRow>(
            "SELECT cs.id, cs.curriculum_id, cs.subject_id, cs.curriculum_knowledge_block_id,
                    cs.subject_type, cs.credits, cs.semester, cs.prerequisite, cs.co_requisite,
                    cs.sort_order, cs.created_at, cs.updated_at,
                    s.code AS subject_code, s.name AS subject_name,
                    s.credits AS subject_credits
             FROM curriculum_subjects cs
             JOIN subjects s ON s.id = cs.subject_id
             WHERE cs.curriculum_id = $1
             ORDER BY cs.sort_order, cs.id",
        )
        .bind(curriculum_id)
        .fetch_all(conn)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| CurriculumSubjectDetail {
                subject: SubjectSummary {
                    id: row.assignment.subject_id,
                    code: row.subject_code,
                    name: row.subject_name,
                    credits: row.subject_credits,
                },
                assignment: row.assignment,
            })
            .collect())
    }

    /// Update an assignment.
    ///
    /// The knowledge-block link is tri-state: absent leaves it, `null`
    /// detaches, a value moves the subject under that link.
    pub async fn update(
        pool: &PgPool,
        curriculum_id: DbId,
        assignment_id: DbId,
        input: &UpdateCurriculumSubject,
    ) -> Result<Option<CurriculumSubject>, sqlx::Error> {
        let (set_link, link_id) = match input.curriculum_knowledge_block_id {
            Some(link) => (true, link),
            None => (false, None),
        };
        let query = format!(
            "UPDATE curriculum_subjects SET
                curriculum_knowledge_block_id =
                    CASE WHEN $3 THEN $4 ELSE curriculum_knowledge_block_id END,
                subject_type = COALESCE($5, subject_type),
                credits = COALESCE($6, credits),
                semester = COALESCE($7, semester),
                prerequisite = COALESCE($8, prerequisite),
                co_requisite = COALESCE($9, co_requisite),
                sort_order = COALESCE($10, sort_order)
             WHERE id = $1 AND curriculum_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CurriculumSubject>(&query)
            .bind(assignment_id)
            .bind(curriculum_id)
            .bind(set_link)
            .bind(link_id)
            .bind(&input.subject_type)
            .bind(input.credits)
            .bind(input.semester)
            .bind(&input.prerequisite)
            .bind(&input.co_requisite)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(
        pool: &PgPool,
        curriculum_id: DbId,
        assignment_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM curriculum_subjects WHERE id = $1 AND curriculum_id = $2")
                .bind(assignment_id)
                .bind(curriculum_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
