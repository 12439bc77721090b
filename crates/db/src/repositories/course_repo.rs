//! Repository for the `courses` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::{Course, CreateCourse, UpdateCourse};

const COLUMNS: &str = "id, subject_id, lecturer_id, code, semester, academic_year, max_students, \
                       created_at, updated_at";

/// Provides CRUD operations for course offerings.
pub struct CourseRepo;

impl CourseRepo {
    pub async fn create(pool: &PgPool, input: &CreateCourse) -> Result<Course, sqlx::Error> {
        let query = format!(
            "INSERT INTO courses
                (subject_id, lecturer_id, code, semester, academic_year, max_students)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(input.subject_id)
            .bind(input.lecturer_id)
            .bind(&input.code)
            .bind(input.semester)
            .bind(&input.academic_year)
            .bind(input.max_students)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE id = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List courses, optionally filtered by subject and/or lecturer.
    pub async fn list(
        pool: &PgPool,
        subject_id: Option<DbId>,
        lecturer_id: Option<DbId>,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM courses
             WHERE ($1::BIGINT IS NULL OR subject_id = $1)
               AND ($2::BIGINT IS NULL OR lecturer_id = $2)
             ORDER BY academic_year DESC, semester, code, id"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(subject_id)
            .bind(lecturer_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCourse,
    ) -> Result<Option<Course>, sqlx::Error> {
        let query = format!(
            "UPDATE courses SET
                subject_id = COALESCE($2, subject_id),
                lecturer_id = COALESCE($3, lecturer_id),
                code = COALESCE($4, code),
                semester = COALESCE($5, semester),
                academic_year = COALESCE($6, academic_year),
                max_students = COALESCE($7, max_students)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .bind(input.subject_id)
            .bind(input.lecturer_id)
            .bind(&input.code)
            .bind(input.semester)
            .bind(&input.academic_year)
            .bind(input.max_students)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM courses WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
