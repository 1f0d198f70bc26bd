//! Tag and equipment-tag models and DTOs.

use camerapedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Lightweight tag info returned when listing tags for equipment.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct TagInfo {
    pub id: DbId,
    pub name: String,
}

/// A tag joined with the equipment it is applied to. Used when loading tags
/// for many equipment items in one query.
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentTagInfo {
    pub equipment_id: DbId,
    pub id: DbId,
    pub name: String,
}

impl From<EquipmentTagInfo> for TagInfo {
    fn from(row: EquipmentTagInfo) -> Self {
        Self {
            id: row.id,
            name: row.name,
        }
    }
}

/// DTO for creating a new tag.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTag {
    pub name: Option<String>,
}

/// DTO for attaching existing tags to an equipment item.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachTagsRequest {
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}
