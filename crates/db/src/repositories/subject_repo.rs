//! Repository for the `subjects` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::subject::{CreateSubject, Subject, UpdateSubject};

const COLUMNS: &str = "id, faculty_id, name, code, credits, theory_hours, practice_hours, \
                       description, created_at, updated_at";

/// Provides CRUD operations for the subject catalog.
pub struct SubjectRepo;

impl SubjectRepo {
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects
                (faculty_id, name, code, credits, theory_hours, practice_hours, description)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.credits)
            .bind(input.theory_hours)
            .bind(input.practice_hours)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List subjects ordered by code, optionally restricted to one faculty.
    pub async fn list(pool: &PgPool, faculty_id: Option<DbId>) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM subjects
             WHERE ($1::BIGINT IS NULL OR faculty_id = $1)
             ORDER BY code, id"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubject,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects SET
                faculty_id = COALESCE($2, faculty_id),
                name = COALESCE($3, name),
                code = COALESCE($4, code),
                credits = COALESCE($5, credits),
                theory_hours = COALESCE($6, theory_hours),
                practice_hours = COALESCE($7, practice_hours),
                description = COALESCE($8, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.credits)
            .bind(input.theory_hours)
            .bind(input.practice_hours)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subject. Fails with a foreign-key violation while any
    /// curriculum still assigns it.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM subjects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
