//! Per-object transform entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::types::{DbId, Timestamp};

/// A row from the `object_transforms` table, keyed `(model_id, object_name)`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ObjectTransform {
    pub id: DbId,
    pub model_id: DbId,
    pub object_name: String,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub rotation_x: f64,
    pub rotation_y: f64,
    pub rotation_z: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    pub visible: bool,
    pub deleted: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one transform in a replace-all save.
#[derive(Debug, Clone, Deserialize)]
pub struct NewObjectTransform {
    pub object_name: String,
    #[serde(default)]
    pub position_x: f64,
    #[serde(default)]
    pub position_y: f64,
    #[serde(default)]
    pub position_z: f64,
    #[serde(default)]
    pub rotation_x: f64,
    #[serde(default)]
    pub rotation_y: f64,
    #[serde(default)]
    pub rotation_z: f64,
    #[serde(default = "default_scale")]
    pub scale_x: f64,
    #[serde(default = "default_scale")]
    pub scale_y: f64,
    #[serde(default = "default_scale")]
    pub scale_z: f64,
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub deleted: bool,
}

fn default_scale() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}
