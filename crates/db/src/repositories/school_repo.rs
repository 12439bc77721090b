//! Repository for the `schools` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::school::{CreateSchool, School, UpdateSchool};

const COLUMNS: &str = "id, university_id, name, code, description, created_at, updated_at";

/// Provides CRUD operations for schools.
pub struct SchoolRepo;

impl SchoolRepo {
    pub async fn create(pool: &PgPool, input: &CreateSchool) -> Result<School, sqlx::Error> {
        let query = format!(
            "INSERT INTO schools (university_id, name, code, description)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(input.university_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<School>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM schools WHERE id = $1");
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List schools, optionally restricted to one university.
    pub async fn list(
        pool: &PgPool,
        university_id: Option<DbId>,
    ) -> Result<Vec<School>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM schools
             WHERE ($1::BIGINT IS NULL OR university_id = $1)
             ORDER BY name, id"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(university_id)
            .fetch_all(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSchool,
    ) -> Result<Option<School>, sqlx::Error> {
        let query = format!(
            "UPDATE schools SET
                university_id = COALESCE($2, university_id),
                name = COALESCE($3, name),
                code = COALESCE($4, code),
                description = COALESCE($5, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, School>(&query)
            .bind(id)
            .bind(input.university_id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM schools WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
