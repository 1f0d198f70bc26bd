//! Repository for the `specification_definitions` table.

use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::specification::{NewSpecDefinition, SpecDefinition};

const COLUMNS: &str = "\
    id, spec_key, display_name, value_type, applicable_to, unit, description, \
    created_at, updated_at";

/// Provides create/read operations for specification definitions.
///
/// Definitions are immutable once created; there is no update path.
pub struct SpecDefinitionRepo;

impl SpecDefinitionRepo {
    /// Insert a new definition. A duplicate `spec_key` violates
    /// `uq_specification_definitions_spec_key`.
    pub async fn create(
        pool: &PgPool,
        input: &NewSpecDefinition,
    ) -> Result<SpecDefinition, sqlx::Error> {
        let applicable_to: Vec<String> = input
            .applicable_to
            .iter()
            .map(|t| t.as_str().to_string())
            .collect();

        let query = format!(
            "INSERT INTO specification_definitions \
                (spec_key, display_name, value_type, applicable_to, unit, description) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SpecDefinition>(&query)
            .bind(&input.spec_key)
            .bind(&input.display_name)
            .bind(input.value_type.as_str())
            .bind(&applicable_to)
            .bind(&input.unit)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find a definition by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<SpecDefinition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM specification_definitions WHERE id = $1");
        sqlx::query_as::<_, SpecDefinition>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all definitions ordered by ID.
    pub async fn list(pool: &PgPool) -> Result<Vec<SpecDefinition>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM specification_definitions ORDER BY id");
        sqlx::query_as::<_, SpecDefinition>(&query)
            .fetch_all(pool)
            .await
    }
}
