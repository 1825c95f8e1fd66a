//! Multipart model upload.
//!
//! Validation (extension allow-list, size cap) runs before the file
//! touches the object store or the database. After the file is stored, a
//! failed catalog insert is retried without the optional size column on
//! schema drift, and otherwise triggers best-effort cleanup of the
//! just-stored object.

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;

use plinth_core::upload::{storage_key, validate_extension, validate_size};
use plinth_db::models::model::{CreateModel, Model};
use plinth_db::repositories::ModelRepo;

use crate::error::{AppError, AppResult};
use crate::response::UploadResponse;
use crate::state::AppState;

/// Content type stored alongside the uploaded object.
fn content_type_for(ext: &str) -> &'static str {
    match ext {
        "glb" => "model/gltf-binary",
        "gltf" => "model/gltf+json",
        _ => "application/octet-stream",
    }
}

/// POST /api/upload -- multipart form: `file`, `name`, `description?`.
pub async fn upload_model(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<(StatusCode, Json<UploadResponse>)> {
    let mut file: Option<(String, Vec<u8>)> = None;
    let mut name: Option<String> = None;
    let mut description: Option<String> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        match field.name().unwrap_or_default() {
            "file" => {
                let filename = field
                    .file_name()
                    .ok_or_else(|| {
                        AppError::BadRequest("File field is missing a filename".to_string())
                    })?
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((filename, bytes.to_vec()));
            }
            "name" => {
                name = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            other => {
                tracing::debug!(field = other, "Ignoring unknown multipart field");
            }
        }
    }

    let (filename, bytes) =
        file.ok_or_else(|| AppError::BadRequest("Missing required field 'file'".to_string()))?;
    let name =
        name.ok_or_else(|| AppError::BadRequest("Missing required field 'name'".to_string()))?;
    if name.trim().is_empty() {
        return Err(AppError::BadRequest(
            "Field 'name' must not be empty".to_string(),
        ));
    }

    // Both gates run before any storage or database call.
    let ext = validate_extension(&filename)?;
    validate_size(bytes.len() as u64)?;
    let size_bytes = bytes.len() as i64;

    let key = storage_key(&name, &ext, chrono::Utc::now().timestamp_millis());

    state
        .store
        .put(&key, bytes, Some(content_type_for(&ext)))
        .await
        .map_err(|e| AppError::Upload {
            message: "Failed to store uploaded file".to_string(),
            details: e.to_string(),
        })?;

    let file_url = state.store.public_url(&key);
    let input = CreateModel {
        name: name.clone(),
        description,
        file_url: file_url.clone(),
        file_size_bytes: Some(size_bytes),
    };

    let model = insert_catalog_row(&state, &key, &input).await?;
    tracing::info!(model_id = model.id, name = %model.name, size_bytes, "Model uploaded");

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            id: model.id,
            name: model.name,
            file_url,
            message: "Model uploaded".to_string(),
        }),
    ))
}

/// Insert the catalog row for an already-stored file.
///
/// On `undefined_column` (a deployment whose schema predates the size
/// column) the insert is retried without that field. On any other failure
/// the stored object is best-effort deleted so a failed upload doesn't
/// leave an orphan behind.
async fn insert_catalog_row(
    state: &AppState,
    key: &str,
    input: &CreateModel,
) -> AppResult<Model> {
    let err = match ModelRepo::create(&state.pool, input).await {
        Ok(model) => return Ok(model),
        Err(e) => e,
    };

    if plinth_db::is_undefined_column(&err) {
        tracing::warn!(error = %err,
            "Size column missing from models table; retrying insert without it");
        match ModelRepo::create_without_size(&state.pool, input).await {
            Ok(model) => return Ok(model),
            Err(e) => return Err(cleanup_and_fail(state, key, e).await),
        }
    }

    Err(cleanup_and_fail(state, key, err).await)
}

/// Best-effort removal of the stored object after a failed insert.
async fn cleanup_and_fail(state: &AppState, key: &str, err: sqlx::Error) -> AppError {
    if let Err(cleanup_err) = state.store.delete(key).await {
        tracing::warn!(key, error = %cleanup_err,
            "Failed to clean up stored file after insert failure");
    }
    AppError::Upload {
        message: "Failed to create catalog entry".to_string(),
        details: err.to_string(),
    }
}
