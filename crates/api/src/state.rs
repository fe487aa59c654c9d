use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pool is reference-counted internally.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, created at startup and closed on shutdown.
    pub pool: envanter_db::DbPool,
    /// Server configuration (admin secret, CORS, timeouts).
    pub config: Arc<ServerConfig>,
}
