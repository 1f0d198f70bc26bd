//! Repository for the `brands` table.

use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::brand::Brand;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, country_of_origin, logo_url, created_at, updated_at";

/// Provides create/read operations for brands.
pub struct BrandRepo;

impl BrandRepo {
    /// Insert a new brand, returning the created row.
    ///
    /// A duplicate name surfaces as a violation of `uq_brands_name`.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        country_of_origin: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<Brand, sqlx::Error> {
        let query = format!(
            "INSERT INTO brands (name, country_of_origin, logo_url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Brand>(&query)
            .bind(name)
            .bind(country_of_origin)
            .bind(logo_url)
            .fetch_one(pool)
            .await
    }

    /// Find a brand by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands WHERE id = $1");
        sqlx::query_as::<_, Brand>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all brands ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Brand>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM brands ORDER BY name, id");
        sqlx::query_as::<_, Brand>(&query).fetch_all(pool).await
    }
}
