//! Repository for the `majors` table.

use curricula_core::types::DbId;
use sqlx::{PgConnection, PgPool};

use crate::models::major::{CreateMajor, Major, MajorSummary, UpdateMajor};

const COLUMNS: &str =
    "id, faculty_id, name, code, degree_level, description, created_at, updated_at";

/// Provides CRUD operations for majors.
pub struct MajorRepo;

impl MajorRepo {
    pub async fn create(pool: &PgPool, input: &CreateMajor) -> Result<Major, sqlx::Error> {
        let query = format!(
            "INSERT INTO majors (faculty_id, name, code, degree_level, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Major>(&query)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.degree_level)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Major>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM majors WHERE id = $1");
        sqlx::query_as::<_, Major>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Identifying fields of one major, read on an existing connection.
    pub async fn find_summary(
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<Option<MajorSummary>, sqlx::Error> {
        sqlx::query_as::<_, MajorSummary>(
            "SELECT id, faculty_id, name, code FROM majors WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(conn)
        .await
    }

    /// List majors, optionally restricted to one faculty.
    pub async fn list(pool: &PgPool, faculty_id: Option<DbId>) -> Result<Vec<Major>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM majors
             WHERE ($1::BIGINT IS NULL OR faculty_id = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Major>(&query)
            .bind(faculty_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMajor,
    ) -> Result<Option<Major>, sqlx::Error> {
        let query = format!(
            "UPDATE majors SET
                faculty_id = COALESCE($2, faculty_id),
                name = COALESCE($3, name),
                code = COALESCE($4, code),
                degree_level = COALESCE($5, degree_level),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Major>(&query)
            .bind(id)
            .bind(input.faculty_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.degree_level)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a major and, by cascade, its curricula.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM majors WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
