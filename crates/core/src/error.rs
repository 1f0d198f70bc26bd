use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingRequiredField(Vec<String>),

    #[error("Type mismatch: {0}")]
    TypeMismatch(String),

    #[error("Inapplicable specification: {0}")]
    Inapplicable(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Shorthand for a single missing field.
    pub fn missing(field: &str) -> Self {
        Self::MissingRequiredField(vec![field.to_string()])
    }
}
