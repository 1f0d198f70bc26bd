pub mod brand;
pub mod equipment;
pub mod health;
pub mod mount;
pub mod spec_definition;
pub mod tag;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /brands                                          list, create
/// /mounts                                          list, create
/// /tags                                            list, create
///
/// /specification-definitions                       list, create
/// /specification-definitions/{id}                  get
///
/// /equipment                                       list, create
/// /equipment/{id}                                  get (with specifications)
/// /equipment/{id}/specifications                   list, create
/// /equipment/{id}/specifications/{value_id}        delete
/// /equipment/{id}/tags                             attach (POST)
/// /equipment/{id}/tags/{tag_id}                    detach (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Reference catalog.
        .nest("/brands", brand::router())
        .nest("/mounts", mount::router())
        .nest("/tags", tag::router())
        // Typed specification definitions.
        .nest("/specification-definitions", spec_definition::router())
        // Equipment, its specification values and tag associations.
        .nest("/equipment", equipment::router())
}
