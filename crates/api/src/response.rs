//! Shared response envelope types for API handlers.
//!
//! Typed structs instead of ad-hoc `serde_json::json!` bodies, so the
//! wire shapes are checked at compile time.

use serde::Serialize;

use plinth_core::types::DbId;

/// `{ "message": ... }` -- simple acknowledgement.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response for a successful model upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub id: DbId,
    pub name: String,
    pub file_url: String,
    pub message: String,
}

/// `{ "success": ..., "data": ... }` -- replace-all save acknowledgement
/// carrying the resynced server state.
#[derive(Debug, Serialize)]
pub struct SaveResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

/// `{ "success": ... }` -- bare acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
