//! Repository for the `universities` table.

use curricula_core::types::DbId;
use sqlx::PgPool;

use crate::models::university::{CreateUniversity, University, UpdateUniversity};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, code, address, website, description, created_at, updated_at";

/// Provides CRUD operations for universities.
pub struct UniversityRepo;

impl UniversityRepo {
    /// Insert a new university, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateUniversity) -> Result<University, sqlx::Error> {
        let query = format!(
            "INSERT INTO universities (name, code, address, website, description)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, University>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a university by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities WHERE id = $1");
        sqlx::query_as::<_, University>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all universities ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<University>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM universities ORDER BY name, id");
        sqlx::query_as::<_, University>(&query).fetch_all(pool).await
    }

    /// Update a university. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateUniversity,
    ) -> Result<Option<University>, sqlx::Error> {
        let query = format!(
            "UPDATE universities SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                address = COALESCE($4, address),
                website = COALESCE($5, website),
                description = COALESCE($6, description)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, University>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.address)
            .bind(&input.website)
            .bind(&input.description)
            .fetch_optional(pool)
            .await
    }

    /// Delete a university and, by cascade, its schools. Returns `true` if
    /// a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM universities WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
