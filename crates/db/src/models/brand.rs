//! Brand entity model and DTOs.

use camerapedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `brands` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: DbId,
    pub name: String,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Brand fields embedded in equipment responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandInfo {
    pub id: DbId,
    pub name: String,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
}

/// DTO for creating a new brand. `name` is required; the handler rejects it
/// when absent or blank.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBrand {
    pub name: Option<String>,
    pub country_of_origin: Option<String>,
    pub logo_url: Option<String>,
}
