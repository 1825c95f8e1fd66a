//! Material preset catalog and merge semantics.
//!
//! A preset is a named bundle of PBR parameters. Applying one to a stored
//! per-object material record overwrites the parameter fields while leaving
//! the record's identity keys (model id, object name) untouched.

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::CoreError;

/// Preset name used for records that carry hand-edited parameters.
pub const CUSTOM_PRESET: &str = "custom";

/// All preset names the catalog knows, including `custom`.
pub const PRESET_NAMES: &[&str] = &[
    "glass", "marble", "wood", "concrete", "metal", "gold", "silver", "copper", "fabric",
    "plastic", "stone", "ceramic", CUSTOM_PRESET,
];

/// PBR parameter bundle shared by presets and stored material records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Base color as `#RRGGBB`.
    pub base_color: String,
    pub metalness: f64,
    pub roughness: f64,
    pub opacity: f64,
    /// Emissive color as `#RRGGBB`, if the material glows.
    pub emissive: Option<String>,
    pub emissive_intensity: Option<f64>,
    /// Preset-specific extras: ior, transmission, thickness, clearcoat,
    /// reflectivity. Kept as JSON so new renderer parameters don't need a
    /// schema change.
    pub extras: serde_json::Value,
}

impl MaterialProperties {
    fn opaque(base_color: &str, metalness: f64, roughness: f64) -> Self {
        Self {
            base_color: base_color.to_string(),
            metalness,
            roughness,
            opacity: 1.0,
            emissive: None,
            emissive_intensity: None,
            extras: json!({}),
        }
    }
}

/// Look up a preset's parameters by name. `None` for unknown names.
///
/// `custom` resolves to a neutral gray baseline; the editor is expected to
/// overwrite its fields.
pub fn preset_properties(name: &str) -> Option<MaterialProperties> {
    let props = match name {
        "glass" => MaterialProperties {
            base_color: "#c8e8f0".to_string(),
            metalness: 0.0,
            roughness: 0.05,
            opacity: 0.25,
            emissive: None,
            emissive_intensity: None,
            extras: json!({
                "ior": 1.5,
                "transmission": 0.95,
                "thickness": 0.5,
            }),
        },
        "marble" => MaterialProperties::opaque("#f2f0eb", 0.0, 0.25),
        "wood" => MaterialProperties::opaque("#8b5a2b", 0.0, 0.7),
        "concrete" => MaterialProperties::opaque("#9a9a96", 0.0, 0.9),
        "metal" => MaterialProperties::opaque("#8c8c8c", 1.0, 0.35),
        "gold" => MaterialProperties::opaque("#ffd700", 1.0, 0.2),
        "silver" => MaterialProperties::opaque("#c0c0c0", 1.0, 0.15),
        "copper" => MaterialProperties::opaque("#b87333", 1.0, 0.3),
        "fabric" => MaterialProperties::opaque("#6d6a75", 0.0, 1.0),
        "plastic" => MaterialProperties {
            extras: json!({"clearcoat": 0.8, "reflectivity": 0.5}),
            ..MaterialProperties::opaque("#e53935", 0.0, 0.4)
        },
        "stone" => MaterialProperties::opaque("#7d7468", 0.0, 0.85),
        "ceramic" => MaterialProperties {
            extras: json!({"clearcoat": 1.0, "reflectivity": 0.6}),
            ..MaterialProperties::opaque("#fafafa", 0.0, 0.1)
        },
        CUSTOM_PRESET => MaterialProperties::opaque("#cccccc", 0.0, 0.5),
        _ => return None,
    };
    Some(props)
}

/// Validate a preset name against the catalog.
pub fn validate_preset_name(name: &str) -> Result<(), CoreError> {
    if PRESET_NAMES.contains(&name) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown material preset '{name}'. Must be one of: {}",
            PRESET_NAMES.join(", ")
        )))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
