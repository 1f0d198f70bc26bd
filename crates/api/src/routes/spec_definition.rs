//! Route definitions for `/specification-definitions`.

use axum::routing::get;
use axum::Router;

use crate::handlers::spec_definition;
use crate::state::AppState;

/// Routes mounted at `/specification-definitions`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(spec_definition::list).post(spec_definition::create))
        .route("/{id}", get(spec_definition::get_by_id))
}
