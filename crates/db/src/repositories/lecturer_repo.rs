//! Repository for the `lecturers` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};

const COLUMNS: &str =
    "id, faculty_id, full_name, code, email, phone, academic_title, created_at, updated_at";

/// Provides CRUD operations for lecturers.
pub struct LecturerRepo;

impl LecturerRepo {
    pub async fn create(pool: &PgPool, input: &CreateLecturer) -> Result<Lecturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO lecturers (faculty_id, full_name, code, email, phone, academic_title)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(input.faculty_id)
            .bind(&input.full_name)
            .bind(&input.code)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.academic_title)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers WHERE id = $1");
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        faculty_id: Option<DbId>,
    ) -> Result<Vec<Lecturer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM lecturers
             WHERE ($1::BIGINT IS NULL OR faculty_id = $1)
             ORDER BY full_name, id"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLecturer,
    ) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!(
            "UPDATE lecturers SET
                faculty_id = COALESCE($2, faculty_id),
                full_name = COALESCE($3, full_name),
                code = COALESCE($4, code),
                email = COALESCE($5, email),
                phone = COALESCE($6, phone),
                academic_title = COALESCE($7, academic_title)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .bind(input.faculty_id)
            .bind(&input.full_name)
            .bind(&input.code)
            .bind(&input.email)
            .bind(&input.phone)
            .bind(&input.academic_title)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lecturer. Courses taught by them keep running unassigned.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lecturers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
