//! Repository for per-object materials.
//!
//! Same replace-all discipline as annotations, plus a keyed upsert used by
//! the preset-apply endpoint.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::object_material::{NewObjectMaterial, ObjectMaterial};

/// Column list for `object_materials` queries.
const MATERIAL_COLUMNS: &str = "\
    id, model_id, object_name, preset, base_color, \
    metalness, roughness, opacity, emissive, emissive_intensity, \
    extras, created_at, updated_at";

const BINDS_PER_ROW: usize = 10;

/// Provides replace-all and keyed upsert operations for materials.
pub struct MaterialRepo;

impl MaterialRepo {
    /// List all material records for a model, by object name.
    pub async fn list_for_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<ObjectMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {MATERIAL_COLUMNS} FROM object_materials \
             WHERE model_id = $1 ORDER BY object_name"
        );
        sqlx::query_as::<_, ObjectMaterial>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// Find one material by its `(model_id, object_name)` key.
    pub async fn find_by_key(
        pool: &PgPool,
        model_id: DbId,
        object_name: &str,
    ) -> Result<Option<ObjectMaterial>, sqlx::Error> {
        let query = format!(
            "SELECT {MATERIAL_COLUMNS} FROM object_materials \
             WHERE model_id = $1 AND object_name = $2"
        );
        sqlx::query_as::<_, ObjectMaterial>(&query)
            .bind(model_id)
            .bind(object_name)
            .fetch_optional(pool)
            .await
    }

    /// Replace every material record for a model with `new_set`.
    pub async fn replace_for_model(
        pool: &PgPool,
        model_id: DbId,
        new_set: &[NewObjectMaterial],
    ) -> Result<Vec<ObjectMaterial>, sqlx::Error> {
        sqlx::query("DELETE FROM object_materials WHERE model_id = $1")
            .bind(model_id)
            .execute(pool)
            .await?;

        if !new_set.is_empty() {
            let placeholders: Vec<String> = (0..new_set.len())
                .map(|i| {
                    let b = i * BINDS_PER_ROW;
                    format!(
                        "(${}, ${}, ${}, ${}, ${}, ${}, ${}, ${}, ${}, ${})",
                        b + 1,
                        b + 2,
                        b + 3,
                        b + 4,
                        b + 5,
                        b + 6,
                        b + 7,
                        b + 8,
                        b + 9,
                        b + 10,
                    )
                })
                .collect();

            let query = format!(
                "INSERT INTO object_materials (\
                    model_id, object_name, preset, base_color, \
                    metalness, roughness, opacity, emissive, \
                    emissive_intensity, extras\
                 ) VALUES {}",
                placeholders.join(", ")
            );

            let mut q = sqlx::query(&query);
            for mat in new_set {
                q = q
                    .bind(model_id)
                    .bind(&mat.object_name)
                    .bind(&mat.preset)
                    .bind(&mat.base_color)
                    .bind(mat.metalness)
                    .bind(mat.roughness)
                    .bind(mat.opacity)
                    .bind(mat.emissive.as_deref())
                    .bind(mat.emissive_intensity)
                    .bind(&mat.extras);
            }
            q.execute(pool).await?;
        }

        Self::list_for_model(pool, model_id).await
    }

    /// Upsert one material record by its `(model_id, object_name)` key.
    ///
    /// The preset-apply path: parameter fields are overwritten, the
    /// identity keys and row id are preserved.
    pub async fn upsert(
        pool: &PgPool,
        model_id: DbId,
        input: &NewObjectMaterial,
    ) -> Result<ObjectMaterial, sqlx::Error> {
        let query = format!(
            "INSERT INTO object_materials (\
                model_id, object_name, preset, base_color, \
                metalness, roughness, opacity, emissive, \
                emissive_intensity, extras\
             ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             ON CONFLICT (model_id, object_name) DO UPDATE SET \
                preset = EXCLUDED.preset, \
                base_color = EXCLUDED.base_color, \
                metalness = EXCLUDED.metalness, \
                roughness = EXCLUDED.roughness, \
                opacity = EXCLUDED.opacity, \
                emissive = EXCLUDED.emissive, \
                emissive_intensity = EXCLUDED.emissive_intensity, \
                extras = EXCLUDED.extras \
             RETURNING {MATERIAL_COLUMNS}"
        );
        sqlx::query_as::<_, ObjectMaterial>(&query)
            .bind(model_id)
            .bind(&input.object_name)
            .bind(&input.preset)
            .bind(&input.base_color)
            .bind(input.metalness)
            .bind(input.roughness)
            .bind(input.opacity)
            .bind(input.emissive.as_deref())
            .bind(input.emissive_intensity)
            .bind(&input.extras)
            .fetch_one(pool)
            .await
    }
}
