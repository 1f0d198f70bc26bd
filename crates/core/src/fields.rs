//! Required-field helpers shared by every create endpoint.

use crate::error::CoreError;

/// Trim a text field, treating absent, empty, and whitespace-only input as
/// missing.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Require a single text field, returning its trimmed value.
pub fn require_text(field: &str, value: Option<String>) -> Result<String, CoreError> {
    non_blank(value).ok_or_else(|| CoreError::missing(field))
}

/// Build a [`CoreError::MissingRequiredField`] naming every field whose
/// presence flag is `false`, in the order given.
pub fn missing_fields(checks: &[(&str, bool)]) -> CoreError {
    CoreError::MissingRequiredField(
        checks
            .iter()
            .filter(|(_, present)| !present)
            .map(|(field, _)| (*field).to_string())
            .collect(),
    )
}
