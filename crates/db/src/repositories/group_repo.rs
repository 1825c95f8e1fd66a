//! Repository for named object groups. Replace-all, like annotations.

use sqlx::PgPool;

use plinth_core::types::DbId;

use crate::models::object_group::{NewObjectGroup, ObjectGroup};

/// Column list for `object_groups` queries.
const GROUP_COLUMNS: &str = "\
    id, model_id, name, object_names, visible, created_at, updated_at";

const BINDS_PER_ROW: usize = 4;

/// Provides replace-all operations for object groups.
pub struct GroupRepo;

impl GroupRepo {
    /// List all groups for a model, by name.
    pub async fn list_for_model(
        pool: &PgPool,
        model_id: DbId,
    ) -> Result<Vec<ObjectGroup>, sqlx::Error> {
        let query = format!(
            "SELECT {GROUP_COLUMNS} FROM object_groups \
             WHERE model_id = $1 ORDER BY name"
        );
        sqlx::query_as::<_, ObjectGroup>(&query)
            .bind(model_id)
            .fetch_all(pool)
            .await
    }

    /// Replace every group for a model with `new_set`.
    pub async fn replace_for_model(
        pool: &PgPool,
        model_id: DbId,
        new_set: &[NewObjectGroup],
    ) -> Result<Vec<ObjectGroup>, sqlx::Error> {
        sqlx::query("DELETE FROM object_groups WHERE model_id = $1")
            .bind(model_id)
            .execute(pool)
            .await?;

        if !new_set.is_empty() {
            let placeholders: Vec<String> = (0..new_set.len())
                .map(|i| {
                    let b = i * BINDS_PER_ROW;
                    format!("(${}, ${}, ${}, ${})", b + 1, b + 2, b + 3, b + 4)
                })
                .collect();

            let query = format!(
                "INSERT INTO object_groups (model_id, name, object_names, visible) \
                 VALUES {}",
                placeholders.join(", ")
            );

            let mut q = sqlx::query(&query);
            for g in new_set {
                q = q
                    .bind(model_id)
                    .bind(&g.name)
                    .bind(&g.object_names)
                    .bind(g.visible);
            }
            q.execute(pool).await?;
        }

        Self::list_for_model(pool, model_id).await
    }
}
