//! Catalog model entity and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::types::{DbId, Timestamp};

/// A row from the `models` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Model {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size_bytes: Option<i64>,
    pub thumbnail_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a new catalog row after a successful upload.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateModel {
    pub name: String,
    pub description: Option<String>,
    pub file_url: String,
    pub file_size_bytes: Option<i64>,
}
