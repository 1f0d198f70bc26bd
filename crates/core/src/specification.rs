//! Typed specification values.
//!
//! A specification definition declares one [`SpecValueType`]; every value
//! attached to equipment under that definition is a [`SpecValue`] of exactly
//! that type. Values arrive from the HTTP boundary as a [`RawSpecValue`] and
//! are turned into a `SpecValue` by [`coerce_value`], which is the only place
//! where untyped input is interpreted.
//!
//! In storage a value occupies one of four nullable columns
//! ([`SpecValueColumns`]); exactly one is populated.

use serde::{Deserialize, Serialize};

use crate::equipment::EquipmentType;
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const VALUE_TYPE_STRING: &str = "STRING";
pub const VALUE_TYPE_INT: &str = "INT";
pub const VALUE_TYPE_FLOAT: &str = "FLOAT";
pub const VALUE_TYPE_BOOLEAN: &str = "BOOLEAN";

/// All valid specification value types.
pub const VALID_VALUE_TYPES: &[&str] = &[
    VALUE_TYPE_STRING,
    VALUE_TYPE_INT,
    VALUE_TYPE_FLOAT,
    VALUE_TYPE_BOOLEAN,
];

// ---------------------------------------------------------------------------
// SpecValueType
// ---------------------------------------------------------------------------

/// The declared type of a specification definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpecValueType {
    String,
    Int,
    Float,
    Boolean,
}

impl SpecValueType {
    /// Convert from a database string value.
    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            VALUE_TYPE_STRING => Ok(Self::String),
            VALUE_TYPE_INT => Ok(Self::Int),
            VALUE_TYPE_FLOAT => Ok(Self::Float),
            VALUE_TYPE_BOOLEAN => Ok(Self::Boolean),
            _ => Err(format!(
                "Invalid value type '{s}'. Must be one of: {}",
                VALID_VALUE_TYPES.join(", ")
            )),
        }
    }

    /// Convert to the database string value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => VALUE_TYPE_STRING,
            Self::Int => VALUE_TYPE_INT,
            Self::Float => VALUE_TYPE_FLOAT,
            Self::Boolean => VALUE_TYPE_BOOLEAN,
        }
    }
}

impl std::fmt::Display for SpecValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// SpecValue
// ---------------------------------------------------------------------------

/// A coerced specification value.
///
/// Serializes adjacently tagged, e.g. `{"valueType": "FLOAT", "value": 2.8}`,
/// so it can be flattened into the enclosing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "valueType",
    content = "value",
    rename_all = "SCREAMING_SNAKE_CASE"
)]
pub enum SpecValue {
    String(String),
    Int(i64),
    Float(f64),
    Boolean(bool),
}

impl SpecValue {
    pub fn value_type(&self) -> SpecValueType {
        match self {
            Self::String(_) => SpecValueType::String,
            Self::Int(_) => SpecValueType::Int,
            Self::Float(_) => SpecValueType::Float,
            Self::Boolean(_) => SpecValueType::Boolean,
        }
    }

    /// Spread the value into its storage columns.
    pub fn to_columns(&self) -> SpecValueColumns {
        let mut columns = SpecValueColumns::default();
        match self {
            Self::String(v) => columns.string_value = Some(v.clone()),
            Self::Int(v) => columns.int_value = Some(*v),
            Self::Float(v) => columns.float_value = Some(*v),
            Self::Boolean(v) => columns.boolean_value = Some(*v),
        }
        columns
    }

    /// Collapse storage columns back into a value of the `expected` type.
    ///
    /// Fails with [`CoreError::Internal`] when the populated column does not
    /// match `expected` or when the row does not hold exactly one value; both
    /// mean the stored data is corrupted, not that the caller sent bad input.
    pub fn from_columns(
        expected: SpecValueType,
        columns: SpecValueColumns,
    ) -> Result<Self, CoreError> {
        let populated = columns.populated_count();
        if populated != 1 {
            return Err(CoreError::Internal(format!(
                "Specification value row holds {populated} typed values, expected exactly 1"
            )));
        }

        let value = match expected {
            SpecValueType::String => columns.string_value.map(Self::String),
            SpecValueType::Int => columns.int_value.map(Self::Int),
            SpecValueType::Float => columns.float_value.map(Self::Float),
            SpecValueType::Boolean => columns.boolean_value.map(Self::Boolean),
        };

        value.ok_or_else(|| {
            CoreError::Internal(format!(
                "Specification value row does not populate the {expected} column"
            ))
        })
    }
}

/// The four nullable storage columns of a specification value row.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpecValueColumns {
    pub string_value: Option<String>,
    pub int_value: Option<i64>,
    pub float_value: Option<f64>,
    pub boolean_value: Option<bool>,
}

impl SpecValueColumns {
    fn populated_count(&self) -> usize {
        [
            self.string_value.is_some(),
            self.int_value.is_some(),
            self.float_value.is_some(),
            self.boolean_value.is_some(),
        ]
        .into_iter()
        .filter(|set| *set)
        .count()
    }
}

// ---------------------------------------------------------------------------
// RawSpecValue
// ---------------------------------------------------------------------------

/// A specification value as received from a client, before coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum RawSpecValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// A JSON array or object. Never valid for any value type.
    Structured,
}

impl RawSpecValue {
    /// Classify a JSON value. Returns `None` for JSON `null`.
    pub fn from_json(value: serde_json::Value) -> Option<Self> {
        use serde_json::Value;

        match value {
            Value::Null => None,
            Value::String(s) => Some(Self::Text(s)),
            Value::Bool(b) => Some(Self::Boolean(b)),
            Value::Number(n) => match n.as_i64() {
                Some(i) => Some(Self::Integer(i)),
                None => n.as_f64().map(Self::Float),
            },
            Value::Array(_) | Value::Object(_) => Some(Self::Structured),
        }
    }

    /// Whether this value counts as "not provided".
    ///
    /// Only the empty string qualifies; `false` and `0` are real values.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Text(s) if s.is_empty())
    }

    fn describe(&self) -> String {
        match self {
            Self::Text(s) => format!("text \"{s}\""),
            Self::Integer(i) => format!("integer {i}"),
            Self::Float(f) => format!("number {f}"),
            Self::Boolean(b) => format!("boolean {b}"),
            Self::Structured => "array or object".to_string(),
        }
    }
}

/// Whether an optional raw value should be reported as a missing field.
pub fn raw_value_missing(raw: Option<&RawSpecValue>) -> bool {
    raw.map_or(true, RawSpecValue::is_missing)
}

// ---------------------------------------------------------------------------
// Coercion
// ---------------------------------------------------------------------------

/// Coerce a raw client value into the type declared by a definition.
///
/// | Declared  | Accepted input                                              |
/// |-----------|-------------------------------------------------------------|
/// | `STRING`  | text, stored verbatim                                       |
/// | `INT`     | integer; integral number; text parsing as a base-10 integer |
/// | `FLOAT`   | integer or number; text parsing as a finite float           |
/// | `BOOLEAN` | `true` / `false` only                                       |
pub fn coerce_value(
    raw: Option<RawSpecValue>,
    value_type: SpecValueType,
) -> Result<SpecValue, CoreError> {
    let raw = match raw {
        Some(raw) if !raw.is_missing() => raw,
        _ => return Err(CoreError::missing("value")),
    };

    let coerced = match (value_type, &raw) {
        (SpecValueType::String, RawSpecValue::Text(s)) => Some(SpecValue::String(s.clone())),

        (SpecValueType::Int, RawSpecValue::Integer(i)) => Some(SpecValue::Int(*i)),
        (SpecValueType::Int, RawSpecValue::Float(f)) => integral_float(*f).map(SpecValue::Int),
        (SpecValueType::Int, RawSpecValue::Text(s)) => {
            s.trim().parse::<i64>().ok().map(SpecValue::Int)
        }

        (SpecValueType::Float, RawSpecValue::Integer(i)) => Some(SpecValue::Float(*i as f64)),
        (SpecValueType::Float, RawSpecValue::Float(f)) => Some(SpecValue::Float(*f)),
        (SpecValueType::Float, RawSpecValue::Text(s)) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(SpecValue::Float),

        (SpecValueType::Boolean, RawSpecValue::Boolean(b)) => Some(SpecValue::Boolean(*b)),

        _ => None,
    };

    coerced.ok_or_else(|| {
        CoreError::TypeMismatch(format!(
            "Expected a {value_type} value, got {}",
            raw.describe()
        ))
    })
}

/// Convert a float to `i64` only if it has no fractional part and fits.
fn integral_float(f: f64) -> Option<i64> {
    const LOWER: f64 = i64::MIN as f64;
    const UPPER: f64 = i64::MAX as f64;

    if f.is_finite() && f.fract() == 0.0 && (LOWER..UPPER).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Applicability
// ---------------------------------------------------------------------------

/// Check that a definition may be attached to equipment of the given type.
pub fn check_applicability(
    equipment_type: EquipmentType,
    applicable_to: &[EquipmentType],
    spec_key: &str,
) -> Result<(), CoreError> {
    if applicable_to.contains(&equipment_type) {
        return Ok(());
    }

    let allowed: Vec<&str> = applicable_to.iter().map(EquipmentType::as_str).collect();
    Err(CoreError::Inapplicable(format!(
        "Specification '{spec_key}' does not apply to {equipment_type} equipment (applies to: {})",
        allowed.join(", ")
    )))
}
