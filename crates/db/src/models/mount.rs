//! Lens mount entity model and DTOs.

use camerapedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `mounts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Mount {
    pub id: DbId,
    pub name: String,
    /// Mount family, e.g. "bayonet" or "screw". Exposed as `type`.
    #[serde(rename = "type")]
    pub mount_type: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Mount fields embedded in equipment responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MountInfo {
    pub id: DbId,
    pub name: String,
    #[serde(rename = "type")]
    pub mount_type: Option<String>,
    pub description: Option<String>,
}

/// DTO for creating a new mount.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMount {
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub mount_type: Option<String>,
    pub description: Option<String>,
}
