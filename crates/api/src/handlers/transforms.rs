//! Handlers for per-object transforms: list and replace-all save.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use plinth_core::types::DbId;
use plinth_db::models::object_transform::NewObjectTransform;
use plinth_db::repositories::TransformRepo;

use crate::error::AppResult;
use crate::handlers::{ensure_model_exists, ModelIdParams};
use crate::response::SaveResponse;
use crate::state::AppState;

/// Body of a replace-all transform save.
#[derive(Debug, Deserialize)]
pub struct SaveTransformsRequest {
    pub model_id: DbId,
    pub transforms: Vec<NewObjectTransform>,
}

/// GET /api/transforms?model_id=<id>
pub async fn list_transforms(
    State(state): State<AppState>,
    Query(params): Query<ModelIdParams>,
) -> AppResult<impl IntoResponse> {
    let model_id = params.require()?;
    let items = TransformRepo::list_for_model(&state.pool, model_id).await?;
    tracing::debug!(model_id, count = items.len(), "Listed transforms");
    Ok(Json(items))
}

/// POST /api/transforms -- replace every transform record for a model.
pub async fn save_transforms(
    State(state): State<AppState>,
    Json(input): Json<SaveTransformsRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;

    let data =
        TransformRepo::replace_for_model(&state.pool, input.model_id, &input.transforms).await?;
    tracing::info!(model_id = input.model_id, count = data.len(), "Transforms saved");

    Ok(Json(SaveResponse {
        success: true,
        data,
    }))
}
