//! Handlers for per-object materials: replace-all save and preset apply.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use plinth_core::material::{preset_properties, validate_preset_name};
use plinth_core::types::DbId;
use plinth_db::models::object_material::NewObjectMaterial;
use plinth_db::repositories::MaterialRepo;

use crate::error::AppResult;
use crate::handlers::{ensure_model_exists, ModelIdParams};
use crate::response::SaveResponse;
use crate::state::AppState;

/// Body of a replace-all material save.
#[derive(Debug, Deserialize)]
pub struct SaveMaterialsRequest {
    pub model_id: DbId,
    pub materials: Vec<NewObjectMaterial>,
}

/// Body of a preset application.
#[derive(Debug, Deserialize)]
pub struct ApplyPresetRequest {
    pub model_id: DbId,
    pub object_name: String,
    pub preset: String,
}

/// GET /api/materials?model_id=<id>
pub async fn list_materials(
    State(state): State<AppState>,
    Query(params): Query<ModelIdParams>,
) -> AppResult<impl IntoResponse> {
    let model_id = params.require()?;
    let items = MaterialRepo::list_for_model(&state.pool, model_id).await?;
    tracing::debug!(model_id, count = items.len(), "Listed materials");
    Ok(Json(items))
}

/// POST /api/materials -- replace every material record for a model.
pub async fn save_materials(
    State(state): State<AppState>,
    Json(input): Json<SaveMaterialsRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;

    let data =
        MaterialRepo::replace_for_model(&state.pool, input.model_id, &input.materials).await?;
    tracing::info!(model_id = input.model_id, count = data.len(), "Materials saved");

    Ok(Json(SaveResponse {
        success: true,
        data,
    }))
}

/// POST /api/materials/preset
///
/// Overwrites the object's material parameters with the preset's, keeping
/// the record's identity keys. Extras from an existing record survive
/// unless the preset defines the same key.
pub async fn apply_preset(
    State(state): State<AppState>,
    Json(input): Json<ApplyPresetRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;
    validate_preset_name(&input.preset)?;

    let mut props = preset_properties(&input.preset).ok_or_else(|| {
        crate::error::AppError::InternalError(format!(
            "Preset '{}' passed validation but has no catalog entry",
            input.preset
        ))
    })?;

    let existing =
        MaterialRepo::find_by_key(&state.pool, input.model_id, &input.object_name).await?;
    if let Some(existing) = existing {
        props.extras = merge_extras(existing.extras, props.extras);
    }

    let record = NewObjectMaterial::from_preset(input.object_name, &input.preset, props);
    let saved = MaterialRepo::upsert(&state.pool, input.model_id, &record).await?;
    tracing::info!(
        model_id = input.model_id,
        object_name = %saved.object_name,
        preset = %saved.preset,
        "Material preset applied"
    );

    Ok(Json(SaveResponse {
        success: true,
        data: saved,
    }))
}

/// Overlay preset extras onto existing extras (preset keys win).
fn merge_extras(existing: serde_json::Value, preset: serde_json::Value) -> serde_json::Value {
    match (existing, preset) {
        (serde_json::Value::Object(mut base), serde_json::Value::Object(overlay)) => {
            for (k, v) in overlay {
                base.insert(k, v);
            }
            serde_json::Value::Object(base)
        }
        (_, preset) => preset,
    }
}

#[cfg(test)]
mod tests {
    use super::merge_extras;
    use serde_json::json;

    #[test]
    fn preset_keys_overwrite_existing() {
        let merged = merge_extras(json!({"ior": 1.2, "custom": true}), json!({"ior": 1.5}));
        assert_eq!(merged, json!({"ior": 1.5, "custom": true}));
    }

    #[test]
    fn non_object_existing_is_replaced() {
        let merged = merge_extras(json!(null), json!({"clearcoat": 1.0}));
        assert_eq!(merged, json!({"clearcoat": 1.0}));
    }
}
