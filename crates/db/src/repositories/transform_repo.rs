//! Repository for per-object transforms. Replace-all, like annotations.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::object_transform::{NewObjectTransform, ObjectTransform};

/// Column list for `object_transforms` queries.
const TRANSFORM_COLUMNS: &str = "\
    id, model_id, object_name, \
    position_x, position_y, position_z, \
    rotation_x, rotation_y, rotation_z, \
    scale_x, scale_y, scale_z, \
    visible, deleted, created_at, updated_at";

const BINDS_PER_ROW: usize = 13;

/// Provides replace-all operations for object transforms.
pub struct TransformRepo;

impl TransformRepo {
    /// List all transform records for a model, by object name.
    pub async fn list_for_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<ObjectTransform>, sqlx::Error> {
        let query = format!(
            "SELECT {TRANSFORM_COLUMNS} FROM object_transforms \
             WHERE model_id = $1 ORDER BY object_name"
        );
        sqlx::query_as::<_, ObjectTransform>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every transform record for a model with `new_set`.
    pub async fn replace_for_model(
        pool: &PgPool,
        model_id: DbId,
        new_set: &[NewObjectTransform],
    ) -> Result<Vec<ObjectTransform>, sqlx::Error> {
        sqlx::query("DELETE FROM object_transforms WHERE model_id = $1")
            .bind(model_id)
            .execute(pool)
            .await?;

        if !new_set.is_empty() {
            let placeholders: Vec<String> = (0..new_set.len())
                .map(|i| {
                    let b = i * BINDS_PER_ROW;
                    let nums: Vec<String> =
                        (1..=BINDS_PER_ROW).map(|n| format!("${}", b + n)).collect();
                    format!("({})", nums.join(", "))
                })
                .collect();

            let query = format!(
                "INSERT INTO object_transforms (\
                    model_id, object_name, \
                    position_x, position_y, position_z, \
                    rotation_x, rotation_y, rotation_z, \
                    scale_x, scale_y, scale_z, \
                    visible, deleted\
                 ) VALUES {}",
                placeholders.join(", ")
            );

            let mut q = sqlx::query(&query);
            for t in new_set {
                q = q
                    .bind(model_id)
                    .bind(&t.object_name)
                    .bind(t.position_x)
                    .bind(t.position_y)
                    .bind(t.position_z)
                    .bind(t.rotation_x)
                    .bind(t.rotation_y)
                    .bind(t.rotation_z)
                    .bind(t.scale_x)
                    .bind(t.scale_y)
                    .bind(t.scale_z)
                    .bind(t.visible)
                    .bind(t.deleted);
            }
            q.execute(pool).await?;
        }

        Self::list_for_model(pool, model_id).await
    }
}
