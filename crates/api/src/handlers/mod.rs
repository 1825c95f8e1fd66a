//! HTTP handlers.

pub mod annotations;
pub mod environment;
pub mod groups;
pub mod materials;
pub mod models;
pub mod transforms;
pub mod upload;

use serde::Deserialize;

use plinth_core::error::CoreError;
use plinth_core::types::DbId;
use plinth_db::models::model::Model;
use plinth_db::repositories::ModelRepo;

use crate::error::{AppError, AppResult};

/// Query parameters for endpoints addressed by model.
#[derive(Debug, Deserialize)]
pub struct ModelIdParams {
    pub model_id: Option<DbId>,
}

impl ModelIdParams {
    /// Unwrap the model id or fail with a 400.
    pub fn require(&self) -> AppResult<DbId> {
        self.model_id
            .ok_or_else(|| AppError::BadRequest("Missing required query parameter 'model_id'".to_string()))
    }
}

/// Query parameters for endpoints addressed by row id.
#[derive(Debug, Deserialize)]
pub struct IdParams {
    pub id: Option<DbId>,
}

impl IdParams {
    /// Unwrap the id or fail with a 400.
    pub fn require(&self) -> AppResult<DbId> {
        self.id
            .ok_or_else(|| AppError::BadRequest("Missing required query parameter 'id'".to_string()))
    }
}

/// Verify that a model exists, returning the full row.
pub async fn ensure_model_exists(pool: &sqlx::PgPool, id: DbId) -> AppResult<Model> {
    ModelRepo::find_by_id(pool, id).await?.ok_or_else(|| {
        AppError::Core(CoreError::NotFound {
            entity: "Model",
            id,
        })
    })
}
