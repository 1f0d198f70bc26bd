//! Equipment entity model, joined views and DTOs.

use camerapedia_core::equipment::EquipmentType;
use camerapedia_core::error::CoreError;
use camerapedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::models::brand::BrandInfo;
use crate::models::mount::MountInfo;
use crate::models::specification::SpecificationValueWithDefinition;
use crate::models::tag::TagInfo;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `equipment` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipment {
    pub id: DbId,
    pub brand_id: DbId,
    pub base_model_name: String,
    pub version_identifier: Option<String>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
    pub equipment_type: String,
    pub main_image_url: Option<String>,
    pub description: Option<String>,
    pub mount_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Equipment {
    /// The stored equipment type as an enum.
    ///
    /// The column is CHECK-constrained, so a parse failure means the row is
    /// corrupted and is reported as [`CoreError::Internal`].
    pub fn parsed_equipment_type(&self) -> Result<EquipmentType, CoreError> {
        EquipmentType::from_str_value(&self.equipment_type).map_err(|e| {
            CoreError::Internal(format!("Equipment {} has a corrupted type: {e}", self.id))
        })
    }
}

/// An `equipment` row joined with its brand and optional mount.
///
/// Brand and mount columns are aliased with `brand_` / `mount_` prefixes.
#[derive(Debug, Clone, FromRow)]
pub struct EquipmentJoinRow {
    #[sqlx(flatten)]
    pub equipment: Equipment,
    pub brand_name: String,
    pub brand_country_of_origin: Option<String>,
    pub brand_logo_url: Option<String>,
    pub mount_name: Option<String>,
    pub mount_type: Option<String>,
    pub mount_description: Option<String>,
}

/// Equipment enriched with its brand, mount and tags.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentWithRelations {
    #[serde(flatten)]
    pub equipment: Equipment,
    pub brand: BrandInfo,
    pub mount: Option<MountInfo>,
    pub tags: Vec<TagInfo>,
}

impl EquipmentWithRelations {
    /// Assemble from a joined row and the item's tags.
    pub fn from_join(row: EquipmentJoinRow, tags: Vec<TagInfo>) -> Self {
        let brand = BrandInfo {
            id: row.equipment.brand_id,
            name: row.brand_name,
            country_of_origin: row.brand_country_of_origin,
            logo_url: row.brand_logo_url,
        };
        let mount = match (row.equipment.mount_id, row.mount_name) {
            (Some(id), Some(name)) => Some(MountInfo {
                id,
                name,
                mount_type: row.mount_type,
                description: row.mount_description,
            }),
            _ => None,
        };

        Self {
            equipment: row.equipment,
            brand,
            mount,
            tags,
        }
    }
}

/// Full equipment detail: relations plus every specification value.
#[derive(Debug, Clone, Serialize)]
pub struct EquipmentDetail {
    #[serde(flatten)]
    pub item: EquipmentWithRelations,
    pub specifications: Vec<SpecificationValueWithDefinition>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating equipment, as received from clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEquipment {
    pub brand_id: Option<DbId>,
    pub base_model_name: Option<String>,
    pub version_identifier: Option<String>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
    pub equipment_type: Option<String>,
    pub main_image_url: Option<String>,
    pub description: Option<String>,
    pub mount_id: Option<DbId>,
    /// Existing tags to attach on creation.
    #[serde(default)]
    pub tag_ids: Vec<DbId>,
}

/// Validated equipment insert.
#[derive(Debug, Clone)]
pub struct NewEquipment {
    pub brand_id: DbId,
    pub base_model_name: String,
    pub version_identifier: Option<String>,
    pub production_start_year: Option<i32>,
    pub production_end_year: Option<i32>,
    pub equipment_type: EquipmentType,
    pub main_image_url: Option<String>,
    pub description: Option<String>,
    pub mount_id: Option<DbId>,
    pub tag_ids: Vec<DbId>,
}
