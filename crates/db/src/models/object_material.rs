//! Per-object material entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::material::MaterialProperties;
use plinth_core::types::{DbId, Timestamp};

/// A row from the `object_materials` table, keyed `(model_id, object_name)`.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ObjectMaterial {
    pub id: DbId,
    pub model_id: DbId,
    pub object_name: String,
    pub preset: String,
    pub base_color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
    pub emissive: Option<String>,
    pub emissive_intensity: Option<f64>,
    pub extras: serde_json::Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for one material in a replace-all save.
#[derive(Debug, Clone, Deserialize)]
pub struct NewObjectMaterial {
    pub object_name: String,
    #[serde(default = "default_preset")]
    pub preset: String,
    pub base_color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
    pub emissive: Option<String>,
    pub emissive_intensity: Option<f64>,
    #[serde(default = "default_extras")]
    pub extras: serde_json::Value,
}

fn default_preset() -> String {
    plinth_core::material::CUSTOM_PRESET.to_string()
}

fn default_extras() -> serde_json::Value {
    serde_json::json!({})
}

impl NewObjectMaterial {
    /// Build a material record for an object from a named preset's
    /// parameters, preserving only the identity key (object name).
    pub fn from_preset(object_name: String, preset: &str, props: MaterialProperties) -> Self {
        Self {
            object_name,
            preset: preset.to_string(),
            base_color: props.base_color,
            metalness: props.metalness,
            roughness: props.roughness,
            opacity: props.opacity,
            emissive: props.emissive,
            emissive_intensity: props.emissive_intensity,
            extras: props.extras,
        }
    }
}
