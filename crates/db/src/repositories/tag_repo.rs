//! Repository for the `tags` and `equipment_tags` tables.

use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::tag::{EquipmentTagInfo, Tag, TagInfo};

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides tag CRUD and equipment-tag associations.
pub struct TagRepo;

impl TagRepo {
    // -----------------------------------------------------------------------
    // Tag CRUD
    // -----------------------------------------------------------------------

    /// Insert a new tag. A duplicate name violates `uq_tags_name`.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List all tags ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY name, id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Return the subset of `ids` that exist in `tags`.
    pub async fn find_existing_ids(pool: &PgPool, ids: &[DbId]) -> Result<Vec<DbId>, sqlx::Error> {
        let rows: Vec<(DbId,)> = sqlx::query_as("SELECT id FROM tags WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    // -----------------------------------------------------------------------
    // Equipment-tag associations
    // -----------------------------------------------------------------------

    /// Tags applied to one equipment item, ordered by name.
    pub async fn list_for_equipment(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<TagInfo>, sqlx::Error> {
        sqlx::query_as::<_, TagInfo>(
            "SELECT t.id, t.name \
             FROM equipment_tags et \
             JOIN tags t ON t.id = et.tag_id \
             WHERE et.equipment_id = $1 \
             ORDER BY t.name, t.id",
        )
        .bind(equipment_id)
        .fetch_all(pool)
        .await
    }

    /// Tags applied to any of the given equipment items.
    pub async fn list_for_equipment_ids(
        pool: &PgPool,
        equipment_ids: &[DbId],
    ) -> Result<Vec<EquipmentTagInfo>, sqlx::Error> {
        sqlx::query_as::<_, EquipmentTagInfo>(
            "SELECT et.equipment_id, t.id, t.name \
             FROM equipment_tags et \
             JOIN tags t ON t.id = et.tag_id \
             WHERE et.equipment_id = ANY($1) \
             ORDER BY et.equipment_id, t.name, t.id",
        )
        .bind(equipment_ids)
        .fetch_all(pool)
        .await
    }

    /// Apply tags to an equipment item. Idempotent for tags already applied.
    ///
    /// Returns the number of new associations.
    pub async fn attach(
        pool: &PgPool,
        equipment_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let attached = Self::attach_inner(&mut tx, equipment_id, tag_ids).await?;
        tx.commit().await?;
        Ok(attached)
    }

    /// Remove a tag from an equipment item. Returns `true` if an association
    /// was removed.
    pub async fn detach(
        pool: &PgPool,
        equipment_id: DbId,
        tag_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM equipment_tags WHERE equipment_id = $1 AND tag_id = $2")
                .bind(equipment_id)
                .bind(tag_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Insert junction rows inside an existing transaction.
    pub(crate) async fn attach_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        equipment_id: DbId,
        tag_ids: &[DbId],
    ) -> Result<u64, sqlx::Error> {
        let mut attached = 0;
        for &tag_id in tag_ids {
            let result = sqlx::query(
                "INSERT INTO equipment_tags (equipment_id, tag_id) VALUES ($1, $2) \
                 ON CONFLICT (equipment_id, tag_id) DO NOTHING",
            )
            .bind(equipment_id)
            .bind(tag_id)
            .execute(&mut **tx)
            .await?;
            attached += result.rows_affected();
        }
        Ok(attached)
    }
}
