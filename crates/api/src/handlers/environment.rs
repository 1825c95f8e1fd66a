//! Handlers for per-model environment settings.
//!
//! One row per model, upserted. GET returns `null` rather than 404 when a
//! model has no saved environment yet -- the viewer falls back to its
//! defaults.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use plinth_db::models::model_environment::UpsertEnvironment;
use plinth_db::repositories::EnvironmentRepo;

use crate::error::AppResult;
use crate::handlers::{ensure_model_exists, ModelIdParams};
use crate::response::SaveResponse;
use crate::state::AppState;

/// GET /api/environment?model_id=<id>
pub async fn get_environment(
    State(state): State<AppState>,
    Query(params): Query<ModelIdParams>,
) -> AppResult<impl IntoResponse> {
    let model_id = params.require()?;
    let env = EnvironmentRepo::get_for_model(&state.pool, model_id).await?;
    Ok(Json(env))
}

/// PUT /api/environment -- upsert a model's environment settings.
pub async fn put_environment(
    State(state): State<AppState>,
    Json(input): Json<UpsertEnvironment>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;

    let saved = EnvironmentRepo::upsert(&state.pool, input.model_id, &input.settings).await?;
    tracing::info!(model_id = input.model_id, "Environment saved");

    Ok(Json(SaveResponse {
        success: true,
        data: saved,
    }))
}
