//! Equipment type enumeration and equipment-level field rules.
//!
//! The string constants must match the CHECK constraints in
//! `20250301000003_create_equipment.sql`.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const EQUIPMENT_CAMERA_BODY: &str = "CAMERA_BODY";
pub const EQUIPMENT_LENS: &str = "LENS";
pub const EQUIPMENT_FLASH: &str = "FLASH";
pub const EQUIPMENT_MOTOR: &str = "MOTOR";
pub const EQUIPMENT_ACCESSORY: &str = "ACCESSORY";

/// All valid equipment type values.
pub const VALID_EQUIPMENT_TYPES: &[&str] = &[
    EQUIPMENT_CAMERA_BODY,
    EQUIPMENT_LENS,
    EQUIPMENT_FLASH,
    EQUIPMENT_MOTOR,
    EQUIPMENT_ACCESSORY,
];

// ---------------------------------------------------------------------------
// EquipmentType
// ---------------------------------------------------------------------------

/// The kind of a cataloged item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EquipmentType {
    CameraBody,
    Lens,
    Flash,
    Motor,
    Accessory,
}

impl EquipmentType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            EQUIPMENT_CAMERA_BODY => Ok(Self::CameraBody),
            EQUIPMENT_LENS => Ok(Self::Lens),
            EQUIPMENT_FLASH => Ok(Self::Flash),
            EQUIPMENT_MOTOR => Ok(Self::Motor),
            EQUIPMENT_ACCESSORY => Ok(Self::Accessory),
            _ => Err(format!(
                "Invalid equipment type '{s}'. Must be one of: {}",
                VALID_EQUIPMENT_TYPES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CameraBody => EQUIPMENT_CAMERA_BODY,
            Self::Lens => EQUIPMENT_LENS,
            Self::Flash => EQUIPMENT_FLASH,
            Self::Motor => EQUIPMENT_MOTOR,
            Self::Accessory => EQUIPMENT_ACCESSORY,
        }
    }
}

impl std::fmt::Display for EquipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a list of equipment type strings, collapsing duplicates while keeping
/// first-seen order.
///
/// The list must be non-empty and every entry must be a known type.
pub fn parse_equipment_types(values: &[String]) -> Result<Vec<EquipmentType>, CoreError> {
    if values.is_empty() {
        return Err(CoreError::Validation(
            "applicableTo must list at least one equipment type".to_string(),
        ));
    }

    let mut parsed: Vec<EquipmentType> = Vec::with_capacity(values.len());
    for value in values {
        let equipment_type =
            EquipmentType::from_str_value(value.trim()).map_err(CoreError::Validation)?;
        if !parsed.contains(&equipment_type) {
            parsed.push(equipment_type);
        }
    }
    Ok(parsed)
}

/// Validate that a production range is ordered when both ends are known.
pub fn validate_production_years(start: Option<i32>, end: Option<i32>) -> Result<(), CoreError> {
    match (start, end) {
        (Some(start), Some(end)) if start > end => Err(CoreError::Validation(format!(
            "productionStartYear ({start}) must not be after productionEndYear ({end})"
        ))),
        _ => Ok(()),
    }
}
