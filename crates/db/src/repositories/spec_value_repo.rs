//! Repository for the `specification_values` table.
//!
//! Values are immutable: they are created once and deleted explicitly.
//! The typed column matching the definition's value type is the only one
//! populated, which `ck_specification_values_single_value` also enforces.

use camerapedia_core::specification::SpecValue;
use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::specification::{SpecValueDetailRow, SpecValueRow};

const COLUMNS: &str = "\
    id, equipment_id, spec_definition_id, \
    string_value, int_value, float_value, boolean_value, \
    created_at, updated_at";

/// Column list for values (`v`) joined with their definition (`d`).
const DETAIL_COLUMNS: &str = "\
    v.id, v.equipment_id, v.spec_definition_id, \
    v.string_value, v.int_value, v.float_value, v.boolean_value, \
    v.created_at, v.updated_at, \
    d.spec_key AS def_spec_key, \
    d.display_name AS def_display_name, \
    d.value_type AS def_value_type, \
    d.applicable_to AS def_applicable_to, \
    d.unit AS def_unit, \
    d.description AS def_description, \
    d.created_at AS def_created_at, \
    d.updated_at AS def_updated_at";

/// Provides create/list/delete operations for specification values.
pub struct SpecValueRepo;

impl SpecValueRepo {
    /// Insert a value for an (equipment, definition) pair.
    ///
    /// A second value for the same pair violates
    /// `uq_specification_values_equipment_definition`.
    pub async fn create(
        pool: &PgPool,
        equipment_id: DbId,
        spec_definition_id: DbId,
        value: &SpecValue,
    ) -> Result<SpecValueRow, sqlx::Error> {
        let columns = value.to_columns();

        let query = format!(
            "INSERT INTO specification_values \
                (equipment_id, spec_definition_id, \
                 string_value, int_value, float_value, boolean_value) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpecValueRow>(&query)
            .bind(equipment_id)
            .bind(spec_definition_id)
            .bind(columns.string_value)
            .bind(columns.int_value)
            .bind(columns.float_value)
            .bind(columns.boolean_value)
            .fetch_one(pool)
            .await
    }

    /// Find the value stored for an (equipment, definition) pair, if any.
    pub async fn find_by_pair(
        pool: &PgPool,
        equipment_id: DbId,
        spec_definition_id: DbId,
    ) -> Result<Option<SpecValueRow>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM specification_values \
             WHERE equipment_id = $1 AND spec_definition_id = $2"
        );
        sqlx::query_as::<_, SpecValueRow>(&query)
            .bind(equipment_id)
            .bind(spec_definition_id)
            .fetch_optional(pool)
            .await
    }

    /// All values for one equipment item, joined with their definitions, in
    /// insertion order.
    pub async fn list_for_equipment(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<SpecValueDetailRow>, sqlx::Error> {
        let query = format!(
            "SELECT {DETAIL_COLUMNS} \
             FROM specification_values v \
             JOIN specification_definitions d ON d.id = v.spec_definition_id \
             WHERE v.equipment_id = $1 \
             ORDER BY v.id"
        );
        sqlx::query_as::<_, SpecValueDetailRow>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }

    /// Delete a value by ID, scoped to the equipment it belongs to.
    ///
    /// Returns `true` if a row was removed. A value that exists but belongs to
    /// a different equipment item is left untouched.
    pub async fn delete(pool: &PgPool, equipment_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM specification_values WHERE id = $1 AND equipment_id = $2")
                .bind(id)
                .bind(equipment_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
