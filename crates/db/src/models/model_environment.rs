//! Per-model environment settings entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::types::{DbId, Timestamp};

/// A row from the `model_environments` table (one per model).
///
/// Background, fog, lighting rig, grid, and post-processing settings are
/// kept as one JSON document: the renderer owns their interpretation.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ModelEnvironment {
    pub id: DbId,
    pub model_id: DbId,
    pub settings: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for upserting a model's environment.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertEnvironment {
    pub model_id: DbId,
    pub settings: serde_json::Value,
}
