//! Specification definition and specification value models and DTOs.

use camerapedia_core::equipment::{parse_equipment_types, EquipmentType};
use camerapedia_core::error::CoreError;
use camerapedia_core::specification::{SpecValue, SpecValueColumns, SpecValueType};
use camerapedia_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Specification definitions
// ---------------------------------------------------------------------------

/// A row from the `specification_definitions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecDefinition {
    pub id: DbId,
    pub spec_key: String,
    pub display_name: String,
    pub value_type: String,
    pub applicable_to: Vec<String>,
    pub unit: Option<String>,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SpecDefinition {
    /// The declared value type as an enum.
    ///
    /// An unknown stored type means the definition is corrupted; that is an
    /// internal error, never the caller's fault.
    pub fn parsed_value_type(&self) -> Result<SpecValueType, CoreError> {
        SpecValueType::from_str_value(&self.value_type).map_err(|e| {
            CoreError::Internal(format!(
                "Specification definition {} has a corrupted value type: {e}",
                self.id
            ))
        })
    }

    /// The equipment types this definition applies to.
    pub fn parsed_applicable_to(&self) -> Result<Vec<EquipmentType>, CoreError> {
        parse_equipment_types(&self.applicable_to).map_err(|e| {
            CoreError::Internal(format!(
                "Specification definition {} has a corrupted applicability list: {e}",
                self.id
            ))
        })
    }
}

/// DTO for creating a specification definition, as received from clients.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecDefinition {
    pub spec_key: Option<String>,
    pub display_name: Option<String>,
    pub value_type: Option<String>,
    pub applicable_to: Option<Vec<String>>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

/// Validated specification definition insert.
#[derive(Debug, Clone)]
pub struct NewSpecDefinition {
    pub spec_key: String,
    pub display_name: String,
    pub value_type: SpecValueType,
    pub applicable_to: Vec<EquipmentType>,
    pub unit: Option<String>,
    pub description: Option<String>,
}

// ---------------------------------------------------------------------------
// Specification values
// ---------------------------------------------------------------------------

/// A raw row from the `specification_values` table.
///
/// Exactly one of the four typed columns is populated; use
/// [`SpecificationValue::from_row`] to collapse it into a [`SpecValue`].
#[derive(Debug, Clone, FromRow)]
pub struct SpecValueRow {
    pub id: DbId,
    pub equipment_id: DbId,
    pub spec_definition_id: DbId,
    pub string_value: Option<String>,
    pub int_value: Option<i64>,
    pub float_value: Option<f64>,
    pub boolean_value: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A specification value attached to one equipment item.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationValue {
    pub id: DbId,
    pub equipment_id: DbId,
    pub spec_definition_id: DbId,
    #[serde(flatten)]
    pub value: SpecValue,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl SpecificationValue {
    /// Collapse a raw row, checking it holds a value of the `expected` type.
    pub fn from_row(row: SpecValueRow, expected: SpecValueType) -> Result<Self, CoreError> {
        let id = row.id;
        let columns = SpecValueColumns {
            string_value: row.string_value,
            int_value: row.int_value,
            float_value: row.float_value,
            boolean_value: row.boolean_value,
        };
        let value = SpecValue::from_columns(expected, columns).map_err(|e| match e {
            CoreError::Internal(msg) => {
                CoreError::Internal(format!("Specification value {id}: {msg}"))
            }
            other => other,
        })?;

        Ok(Self {
            id,
            equipment_id: row.equipment_id,
            spec_definition_id: row.spec_definition_id,
            value,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// A specification value together with the definition it instantiates.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecificationValueWithDefinition {
    #[serde(flatten)]
    pub value: SpecificationValue,
    pub spec_definition: SpecDefinition,
}

/// A `specification_values` row joined with its definition.
///
/// Definition columns are aliased with a `def_` prefix, except
/// `spec_definition_id` which is shared.
#[derive(Debug, Clone, FromRow)]
pub struct SpecValueDetailRow {
    #[sqlx(flatten)]
    pub value: SpecValueRow,
    pub def_spec_key: String,
    pub def_display_name: String,
    pub def_value_type: String,
    pub def_applicable_to: Vec<String>,
    pub def_unit: Option<String>,
    pub def_description: Option<String>,
    pub def_created_at: Timestamp,
    pub def_updated_at: Timestamp,
}

impl TryFrom<SpecValueDetailRow> for SpecificationValueWithDefinition {
    type Error = CoreError;

    fn try_from(row: SpecValueDetailRow) -> Result<Self, Self::Error> {
        let spec_definition = SpecDefinition {
            id: row.value.spec_definition_id,
            spec_key: row.def_spec_key,
            display_name: row.def_display_name,
            value_type: row.def_value_type,
            applicable_to: row.def_applicable_to,
            unit: row.def_unit,
            description: row.def_description,
            created_at: row.def_created_at,
            updated_at: row.def_updated_at,
        };
        let value = SpecificationValue::from_row(row.value, spec_definition.parsed_value_type()?)?;

        Ok(Self {
            value,
            spec_definition,
        })
    }
}

/// DTO for attaching a specification value to equipment.
///
/// `value` stays untyped here; the handler classifies it into a
/// `RawSpecValue` and coerces it against the definition's declared type.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpecificationValue {
    pub spec_definition_id: Option<DbId>,
    #[serde(default)]
    pub value: Option<serde_json::Value>,
}
