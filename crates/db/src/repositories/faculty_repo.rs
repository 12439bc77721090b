//! Repository for the `faculties` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::faculty::{CreateFaculty, Faculty, UpdateFaculty};

const COLUMNS: &str = "id, school_id, name, code, description, created_at, updated_at";

/// Provides CRUD operations for faculties.
pub struct FacultyRepo;

impl FacultyRepo {
    pub async fn create(pool: &PgPool, input: &CreateFaculty) -> Result<Faculty, sqlx::Error> {
        let query = format!(
            "INSERT INTO faculties (school_id, name, code, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(input.school_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM faculties WHERE id = $1");
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List faculties, optionally restricted to one school.
    pub async fn list(pool: &PgPool, school_id: Option<DbId>) -> Result<Vec<Faculty>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM faculties
             WHERE ($1::BIGINT IS NULL OR school_id = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(school_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFaculty,
    ) -> Result<Option<Faculty>, sqlx::Error> {
        let query = format!(
            "UPDATE faculties SET
                school_id = COALESCE($2, school_id),
                name = COALESCE($3, name),
                code = COALESCE($4, code),
                description = COALESCE($5, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Faculty>(&query)
            .bind(id)
            .bind(input.school_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM faculties WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
