//! Handlers for the model catalog: listing and deletion.
//!
//! Upload lives in [`crate::handlers::upload`].

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;

use plinth_core::upload::key_from_url;
use plinth_db::repositories::ModelRepo;

use crate::error::AppResult;
use crate::handlers::{ensure_model_exists, IdParams};
use crate::response::MessageResponse;
use crate::state::AppState;

/// GET /api/models -- full catalog, newest first.
pub async fn list_models(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let items = ModelRepo::list(&state.pool).await?;
    tracing::debug!(count = items.len(), "Listed models");
    Ok(Json(items))
}

/// DELETE /api/models?id=<id>
///
/// Storage cleanup runs first but never gates the catalog delete: a failed
/// object delete is logged and the row is removed anyway (an orphaned file
/// is accepted in exchange for availability).
pub async fn delete_model(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.require()?;
    let model = ensure_model_exists(&state.pool, id).await?;

    match key_from_url(&model.file_url) {
        Some(key) => {
            if let Err(e) = state.store.delete(&key).await {
                tracing::warn!(model_id = id, key = %key, error = %e,
                    "Failed to delete stored file; continuing with catalog delete");
            }
        }
        None => {
            tracing::warn!(model_id = id, file_url = %model.file_url,
                "Could not derive storage key from file URL");
        }
    }

    ModelRepo::delete(&state.pool, id).await?;
    tracing::info!(model_id = id, name = %model.name, "Model deleted");

    Ok(Json(MessageResponse {
        message: format!("Model '{}' deleted", model.name),
    }))
}
