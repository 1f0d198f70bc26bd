//! Repository for the `mounts` table.

use camerapedia_core::types::DbId;
use sqlx::PgPool;

use crate::models::mount::Mount;

const COLUMNS: &str = "id, name, mount_type, description, created_at, updated_at";

/// Provides create/read operations for lens mounts.
pub struct MountRepo;

impl MountRepo {
    /// Insert a new mount, returning the created row.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        mount_type: Option<&str>,
        description: Option<&str>,
    ) -> Result<Mount, sqlx::Error> {
        let query = format!(
            "INSERT INTO mounts (name, mount_type, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mount>(&query)
            .bind(name)
            .bind(mount_type)
            .bind(description)
            .fetch_one(pool)
            .await
    }

    /// Find a mount by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mounts WHERE id = $1");
        sqlx::query_as::<_, Mount>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all mounts ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mounts ORDER BY name, id");
        sqlx::query_as::<_, Mount>(&query).fetch_all(pool).await
    }
}
