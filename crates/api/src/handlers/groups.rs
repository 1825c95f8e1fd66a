//! Handlers for object groups: list and replace-all save.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use plinth_core::types::DbId;
use plinth_db::models::object_group::NewObjectGroup;
use plinth_db::repositories::GroupRepo;

use crate::error::AppResult;
use crate::handlers::{ensure_model_exists, ModelIdParams};
use crate::response::SaveResponse;
use crate::state::AppState;

/// Body of a replace-all group save.
#[derive(Debug, Deserialize)]
pub struct SaveGroupsRequest {
    pub model_id: DbId,
    pub groups: Vec<NewObjectGroup>,
}

/// GET /api/groups?model_id=<id>
pub async fn list_groups(
    State(state): State<AppState>,
    Query(params): Query<ModelIdParams>,
) -> AppResult<impl IntoResponse> {
    let model_id = params.require()?;
    let items = GroupRepo::list_for_model(&state.pool, model_id).await?;
    tracing::debug!(model_id, count = items.len(), "Listed groups");
    Ok(Json(items))
}

/// POST /api/groups -- replace every group for a model.
pub async fn save_groups(
    State(state): State<AppState>,
    Json(input): Json<SaveGroupsRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;

    let data = GroupRepo::replace_for_model(&state.pool, input.model_id, &input.groups).await?;
    tracing::info!(model_id = input.model_id, count = data.len(), "Groups saved");

    Ok(Json(SaveResponse {
        success: true,
        data,
    }))
}
