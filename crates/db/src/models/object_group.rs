//! Named object group entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::types::{DbId, Timestamp};

/// A row from the `object_groups` table, keyed `(model_id, name)`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ObjectGroup {
    pub id: DbId,
    pub model_id: DbId,
    pub name: String,
    pub object_names: Vec<String>,
    pub visible: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one group in a replace-all save.
#[derive(Debug, Clone, Deserialize)]
pub struct NewObjectGroup {
    pub name: String,
    #[serde(default)]
    pub object_names: Vec<String>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}
