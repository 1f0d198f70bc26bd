//! Route definitions for `/mounts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::mount;
use crate::state::AppState;

/// Routes mounted at `/mounts`.
///
/// ```text
/// GET    /    -> list
/// POST   /    -> create
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(mount::list).post(mount::create))
}
