//! Repository for model annotations.
//!
//! Saving is a replace-all reconciliation: one call deletes every row for
//! the model and re-inserts the incoming set. The two phases are
//! deliberately NOT wrapped in a transaction -- the delete→insert window is
//! an accepted property of the replace-all design, and an insert failure
//! after the delete is surfaced to the caller rather than rolled back.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::annotation::{AnnotationRow, NewAnnotation};

/// Column list for `annotations` queries.
const ANNOTATION_COLUMNS: &str = "\
    id, model_id, title, description, \
    position_x, position_y, position_z, \
    object_name, color, icon, created_at, updated_at";

/// Number of bind parameters per inserted row.
const BINDS_PER_ROW: usize = 9;

/// Provides the replace-all save protocol and read path for annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// List all annotations for a model, oldest first.
    pub async fn list_for_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<AnnotationRow>, sqlx::Error> {
        let query = format!(
            "SELECT {ANNOTATION_COLUMNS} FROM annotations \
             WHERE model_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, AnnotationRow>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every annotation for a model with `new_set`.
    ///
    /// 1. Delete by model id -- unconditional, so rows the client never
    ///    saw are cleared too and repeated saves stay idempotent.
    /// 2. Bulk-insert the new set (skipped when empty).
    /// 3. Re-select and return the full set so callers adopt the
    ///    server-assigned ids without a separate round trip.
    pub async fn replace_for_model(
        pool: &PgPool,
        model_id: DbId,
        new_set: &[NewAnnotation],
    ) -> Result<Vec<AnnotationRow>, sqlx::Error> {
        // Delete phase. A failure here aborts before any insert.
        sqlx::query("DELETE FROM annotations WHERE model_id = $1")
            .bind(model_id)
            .execute(pool)
            .await?;

        // Insert phase.
        if !new_set.is_empty() {
            let placeholders: Vec<String> = (0..new_set.len())
                .map(|i| {
                    let base = i * BINDS_PER_ROW;
                    format!(
                        "(${}, ${}, ${}, ${}, ${}, ${}, ${}, ${}, ${})",
                        base + 1,
                        base + 2,
                        base + 3,
                        base + 4,
                        base + 5,
                        base + 6,
                        base + 7,
                        base + 8,
                        base + 9,
                    )
                })
                .collect();

            let query = format!(
                "INSERT INTO annotations (\
                    model_id, title, description, \
                    position_x, position_y, position_z, \
                    object_name, color, icon\
                 ) VALUES {}",
                placeholders.join(", ")
            );

            let mut q = sqlx::query(&query);
            for ann in new_set {
                q = q
                    .bind(model_id)
                    .bind(&ann.title)
                    .bind(ann.description.as_deref())
                    .bind(ann.position.x)
                    .bind(ann.position.y)
                    .bind(ann.position.z)
                    .bind(&ann.object_name)
                    .bind(ann.color.as_deref())
                    .bind(ann.icon.as_ref());
            }
            q.execute(pool).await?;
        }

        // Resync phase: runs even for an empty set so the caller always
        // holds exactly what the store holds.
        Self::list_for_model(pool, model_id).await
    }

    /// Delete a single annotation by ID. Returns true if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM annotations WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
