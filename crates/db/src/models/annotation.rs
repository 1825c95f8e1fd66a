//! Annotation entity and DTOs.
//!
//! The row struct mirrors the canonical scalar-column storage; the
//! API-facing [`Annotation`] re-packs the position into the nested shape
//! the viewer works with.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use plinth_core::annotation::Position;
use plinth_core::types::{DbId, Timestamp};

/// A row from the `annotations` table (canonical scalar position columns).
#[derive(Debug, Clone, FromRow)]
pub struct AnnotationRow {
    pub id: DbId,
    pub model_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub position_x: f64,
    pub position_y: f64,
    pub position_z: f64,
    pub object_name: String,
    pub color: Option<String>,
    pub icon: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// API-facing annotation with the nested position shape.
#[derive(Debug, Clone, Serialize)]
pub struct Annotation {
    pub id: DbId,
    pub model_id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub position: Position,
    pub object_name: String,
    pub color: Option<String>,
    pub icon: Option<serde_json::Value>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<AnnotationRow> for Annotation {
    fn from(row: AnnotationRow) -> Self {
        Annotation {
            id: row.id,
            model_id: row.model_id,
            title: row.title,
            description: row.description,
            position: Position::new(row.position_x, row.position_y, row.position_z),
            object_name: row.object_name,
            color: row.color,
            icon: row.icon,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// DTO for one annotation in a replace-all save. Position is already
/// normalized to the canonical shape at the API boundary.
#[derive(Debug, Clone, Deserialize)]
pub struct NewAnnotation {
    pub title: String,
    pub description: Option<String>,
    pub position: Position,
    pub object_name: String,
    pub color: Option<String>,
    pub icon: Option<serde_json::Value>,
}
