//! Route definitions for `/equipment` and its nested resources.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::{equipment, specification};
use crate::state::AppState;

/// Routes mounted at `/equipment`.
///
/// ```text
/// GET    /                                   -> equipment::list
/// POST   /                                   -> equipment::create
/// GET    /{id}                               -> equipment::get_by_id
/// GET    /{id}/specifications                -> specification::list
/// POST   /{id}/specifications                -> specification::create
/// DELETE /{id}/specifications/{value_id}     -> specification::delete
/// POST   /{id}/tags                          -> equipment::attach_tags
/// DELETE /{id}/tags/{tag_id}                 -> equipment::detach_tag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(equipment::list).post(equipment::create))
        .route("/{id}", get(equipment::get_by_id))
        .route(
            "/{id}/specifications",
            get(specification::list).post(specification::create),
        )
        .route(
            "/{id}/specifications/{value_id}",
            delete(specification::delete),
        )
        .route("/{id}/tags", post(equipment::attach_tags))
        .route("/{id}/tags/{tag_id}", delete(equipment::detach_tag))
}
