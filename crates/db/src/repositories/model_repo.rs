//! Repository for the model catalog.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::model::{CreateModel, Model};

/// Column list for `models` queries.
const MODEL_COLUMNS: &str = "\
    id, name, description, file_url, file_size_bytes, thumbnail_url, \
    created_at, updated_at";

/// Provides CRUD operations for the model catalog.
pub struct ModelRepo;

impl ModelRepo {
    /// List all models, newest first. No pagination.
    pub async fn list(pool: &PgPool) -> Result<Vec<Model>, sqlx::Error> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Model>(&query).fetch_all(pool).await
    }

    /// Find a model by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Model>, sqlx::Error> {
        let query = format!("SELECT {MODEL_COLUMNS} FROM models WHERE id = $1");
        sqlx::query_as::<_, Model>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a catalog row including the optional size column.
    pub async fn create(pool: &PgPool, input: &CreateModel) -> Result<Model, sqlx::Error> {
        let query = format!(
            "INSERT INTO models (name, description, file_url, file_size_bytes) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {MODEL_COLUMNS}"
        );
        sqlx::query_as::<_, Model>(&query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(&input.file_url)
            .bind(input.file_size_bytes)
            .fetch_one(pool)
            .await
    }

    /// Insert a catalog row without the size column.
    ///
    /// Fallback for deployments whose schema predates `file_size_bytes`;
    /// the upload handler retries through here when the full insert fails
    /// with `undefined_column`.
    pub async fn create_without_size(
        pool: &PgPool,
        input: &CreateModel,
    ) -> Result<Model, sqlx::Error> {
        // The RETURNING list must not reference the missing column either.
        let query = "INSERT INTO models (name, description, file_url) \
             VALUES ($1, $2, $3) \
             RETURNING id, name, description, file_url, \
                 NULL::BIGINT AS file_size_bytes, thumbnail_url, \
                 created_at, updated_at";
        sqlx::query_as::<_, Model>(query)
            .bind(&input.name)
            .bind(input.description.as_deref())
            .bind(&input.file_url)
            .fetch_one(pool)
            .await
    }

    /// Delete a model by ID. Returns true if a row was deleted.
    ///
    /// Dependent annotation/material/transform/environment/group rows go
    /// with it via `ON DELETE CASCADE`.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM models WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
