//! Handlers for the annotation sync protocol.
//!
//! Saving is replace-all: validate, delete every row for the model,
//! re-insert the surviving set, then re-read so the response carries the
//! server-assigned ids. The delete and insert are not transactional; an
//! insert failure after the delete is surfaced as an explicit 500, never
//! swallowed.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;

use plinth_core::annotation::{is_persistable_title, object_name_or_placeholder, WirePosition};
use plinth_core::error::CoreError;
use plinth_core::types::DbId;
use plinth_db::models::annotation::{Annotation, NewAnnotation};
use plinth_db::repositories::AnnotationRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::{ensure_model_exists, IdParams, ModelIdParams};
use crate::response::{SaveResponse, SuccessResponse};
use crate::state::AppState;

/// One annotation as it arrives from the client. The position may use
/// either wire encoding; [`WirePosition`] normalizes at this boundary.
#[derive(Debug, Deserialize)]
pub struct AnnotationPayload {
    pub title: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub position: WirePosition,
    pub object_name: Option<String>,
    pub color: Option<String>,
    pub icon: Option<serde_json::Value>,
}

impl AnnotationPayload {
    fn into_new_annotation(self) -> NewAnnotation {
        NewAnnotation {
            title: self.title,
            description: self.description,
            position: self.position.into(),
            object_name: object_name_or_placeholder(self.object_name),
            color: self.color,
            icon: self.icon,
        }
    }
}

/// Body of a replace-all save.
#[derive(Debug, Deserialize)]
pub struct SaveAnnotationsRequest {
    pub model_id: DbId,
    pub annotations: Vec<AnnotationPayload>,
}

/// GET /api/annotations?model_id=<id>
pub async fn list_annotations(
    State(state): State<AppState>,
    Query(params): Query<ModelIdParams>,
) -> AppResult<impl IntoResponse> {
    let model_id = params.require()?;
    let rows = AnnotationRepo::list_for_model(&state.pool, model_id).await?;
    let items: Vec<Annotation> = rows.into_iter().map(Annotation::from).collect();
    tracing::debug!(model_id, count = items.len(), "Listed annotations");
    Ok(Json(items))
}

/// POST /api/annotations -- replace every annotation for a model.
pub async fn save_annotations(
    State(state): State<AppState>,
    Json(input): Json<SaveAnnotationsRequest>,
) -> AppResult<impl IntoResponse> {
    ensure_model_exists(&state.pool, input.model_id).await?;

    let incoming = input.annotations.len();
    // The UI should never send blank titles, but the protocol still
    // defends: they are dropped, not persisted.
    let validated: Vec<NewAnnotation> = input
        .annotations
        .into_iter()
        .filter(|a| is_persistable_title(&a.title))
        .map(AnnotationPayload::into_new_annotation)
        .collect();
    if validated.len() < incoming {
        tracing::debug!(
            model_id = input.model_id,
            dropped = incoming - validated.len(),
            "Dropped blank-title annotations from save"
        );
    }

    let rows = AnnotationRepo::replace_for_model(&state.pool, input.model_id, &validated)
        .await
        .map_err(|e| {
            // Past the delete phase there is no rollback; the client must
            // be told the save failed rather than shown stale state.
            tracing::error!(model_id = input.model_id, error = %e,
                "Annotation save failed; prior annotations may already be removed");
            AppError::Database(e)
        })?;

    let data: Vec<Annotation> = rows.into_iter().map(Annotation::from).collect();
    tracing::info!(model_id = input.model_id, count = data.len(), "Annotations saved");

    Ok(Json(SaveResponse {
        success: true,
        data,
    }))
}

/// DELETE /api/annotations?id=<id>
pub async fn delete_annotation(
    State(state): State<AppState>,
    Query(params): Query<IdParams>,
) -> AppResult<impl IntoResponse> {
    let id = params.require()?;
    let deleted = AnnotationRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Annotation",
            id,
        }));
    }
    tracing::info!(annotation_id = id, "Annotation deleted");
    Ok(Json(SuccessResponse { success: true }))
}
