pub mod assets;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the full route tree.
///
/// ```text
/// /health              service + database health
/// /                    asset list / upsert / delete
/// /api/assets          same handler, legacy deployment path
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(assets::router())
}
