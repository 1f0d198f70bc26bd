pub mod brand;
pub mod equipment;
pub mod mount;
pub mod spec_definition;
pub mod specification;
pub mod tag;

use camerapedia_core::error::CoreError;
use camerapedia_core::types::DbId;

use crate::error::{AppError, AppResult};

/// Map a unique violation on insert to a [`CoreError::Conflict`] with a
/// readable message; pass every other database error through.
pub(crate) fn duplicate_as_conflict(
    err: sqlx::Error,
    message: impl FnOnce() -> String,
) -> AppError {
    if camerapedia_db::is_unique_violation(&err) {
        AppError::Core(CoreError::Conflict(message()))
    } else {
        AppError::Database(err)
    }
}

/// Reject non-positive path IDs before touching the database.
pub(crate) fn ensure_valid_id(id: DbId) -> AppResult<()> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!("Invalid id {id}")));
    }
    Ok(())
}
