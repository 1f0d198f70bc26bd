use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (the pool is reference-counted internally).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, opened in `main` and closed after shutdown.
    pub pool: camerapedia_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}
