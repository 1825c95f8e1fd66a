//! Repository for per-model environment settings. One row per model,
//! upserted rather than replaced.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::model_environment::ModelEnvironment;

/// Column list for `model_environments` queries.
const ENVIRONMENT_COLUMNS: &str = "id, model_id, settings, created_at, updated_at";

/// Provides get/upsert for model environments.
pub struct EnvironmentRepo;

impl EnvironmentRepo {
    /// Fetch the environment row for a model, if any.
    pub async fn get_for_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Option<ModelEnvironment>, sqlx::Error> {
        let query = format!(
            "SELECT {ENVIRONMENT_COLUMNS} FROM model_environments WHERE model_id = $1"
        );
        sqlx::query_as::<_, ModelEnvironment>(&query)
            .bind(model_id)
            .fetch_optional(pool)
            .await
    }

    /// Upsert the environment row for a model.
    pub async fn upsert(
        pool: &PgPool,
        model_id: DbId,
        settings: &serde_json::Value,
    ) -> Result<ModelEnvironment, sqlx::Error> {
        let query = format!(
            "INSERT INTO model_environments (model_id, settings) \
             VALUES ($1, $2) \
             ON CONFLICT (model_id) DO UPDATE SET settings = EXCLUDED.settings \
             RETURNING {ENVIRONMENT_COLUMNS}"
        );
        sqlx::query_as::<_, ModelEnvironment>(&query)
            .bind(model_id)
            .bind(settings)
            .fetch_one(pool)
            .await
    }
}
