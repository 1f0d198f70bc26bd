//! Repository for the `equipment` table.

use std::collections::HashMap;

use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::equipment::{Equipment, EquipmentJoinRow, EquipmentWithRelations, NewEquipment};
use crate::models::tag::TagInfo;
use crate::repositories::TagRepo;

/// Column list for plain `equipment` queries.
const COLUMNS: &str = "\
    id, brand_id, base_model_name, version_identifier, \
    production_start_year, production_end_year, equipment_type, \
    main_image_url, description, mount_id, created_at, updated_at";

/// Column list for `equipment` joined with `brands` (`b`) and `mounts` (`m`).
const JOINED_COLUMNS: &str = "\
    e.id, e.brand_id, e.base_model_name, e.version_identifier, \
    e.production_start_year, e.production_end_year, e.equipment_type, \
    e.main_image_url, e.description, e.mount_id, e.created_at, e.updated_at, \
    b.name AS brand_name, \
    b.country_of_origin AS brand_country_of_origin, \
    b.logo_url AS brand_logo_url, \
    m.name AS mount_name, \
    m.mount_type AS mount_type, \
    m.description AS mount_description";

const JOINED_FROM: &str = "\
    equipment e \
    JOIN brands b ON b.id = e.brand_id \
    LEFT JOIN mounts m ON m.id = e.mount_id";

/// Provides create/read operations for equipment.
pub struct EquipmentRepo;

impl EquipmentRepo {
    /// Insert a new equipment item, returning the created row.
    ///
    /// If `tag_ids` is non-empty, also creates junction rows in the same
    /// transaction.
    pub async fn create(pool: &PgPool, input: &NewEquipment) -> Result<Equipment, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO equipment \
                (brand_id, base_model_name, version_identifier, production_start_year, \
                 production_end_year, equipment_type, main_image_url, description, mount_id) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             RETURNING {COLUMNS}"
        );
        let equipment = sqlx::query_as::<_, Equipment>(&query)
            .bind(input.brand_id)
            .bind(&input.base_model_name)
            .bind(&input.version_identifier)
            .bind(input.production_start_year)
            .bind(input.production_end_year)
            .bind(input.equipment_type.as_str())
            .bind(&input.main_image_url)
            .bind(&input.description)
            .bind(input.mount_id)
            .fetch_one(&mut *tx)
            .await?;

        if !input.tag_ids.is_empty() {
            TagRepo::attach_inner(&mut tx, equipment.id, &input.tag_ids).await?;
        }

        tx.commit().await?;
        Ok(equipment)
    }

    /// Find an equipment item by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM equipment WHERE id = $1");
        sqlx::query_as::<_, Equipment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an equipment item by ID, enriched with brand, mount and tags.
    pub async fn find_with_relations(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<EquipmentWithRelations>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} WHERE e.id = $1");
        let row = sqlx::query_as::<_, EquipmentJoinRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;

        match row {
            Some(row) => {
                let tags = TagRepo::list_for_equipment(pool, id).await?;
                Ok(Some(EquipmentWithRelations::from_join(row, tags)))
            }
            None => Ok(None),
        }
    }

    /// List every equipment item with brand, mount and tags, ordered by ID.
    pub async fn list_with_relations(
        pool: &PgPool,
    ) -> Result<Vec<EquipmentWithRelations>, sqlx::Error> {
        let query = format!("SELECT {JOINED_COLUMNS} FROM {JOINED_FROM} ORDER BY e.id");
        let rows = sqlx::query_as::<_, EquipmentJoinRow>(&query)
            .fetch_all(pool)
            .await?;

        let ids: Vec<DbId> = rows.iter().map(|r| r.equipment.id).collect();
        let mut tags_by_equipment: HashMap<DbId, Vec<TagInfo>> = HashMap::new();
        for tag in TagRepo::list_for_equipment_ids(pool, &ids).await? {
            tags_by_equipment
                .entry(tag.equipment_id)
                .or_default()
                .push(tag.into());
        }

        Ok(rows
            .into_iter()
            .map(|row| {
                let tags = tags_by_equipment
                    .remove(&row.equipment.id)
                    .unwrap_or_default();
                EquipmentWithRelations::from_join(row, tags)
            })
            .collect())
    }
}
