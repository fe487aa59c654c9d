//! Route definitions for the equipment inventory.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::assets;
use crate::state::AppState;

/// Path the handler was served from before it ran as a standalone service.
pub const LEGACY_PATH: &str = "/api/assets";

/// One method router shared by every mount point.
///
/// ```text
/// GET    -> list_assets
/// POST   -> upsert_asset (admin only)
/// DELETE -> delete_asset (admin only)
/// HEAD   -> 405 (axum would otherwise answer it with the GET handler)
/// other  -> 405 "Method Not Allowed"
/// ```
///
/// Bare OPTIONS requests are turned away by
/// [`reject_bare_options`](crate::middleware::preflight::reject_bare_options)
/// before the CORS layer sees them.
fn asset_methods() -> MethodRouter<AppState> {
    get(assets::list_assets)
        .head(assets::method_not_allowed)
        .post(assets::upsert_asset)
        .delete(assets::delete_asset)
        .fallback(assets::method_not_allowed)
}

/// Asset routes mounted at `/` and [`LEGACY_PATH`].
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", asset_methods())
        .route(LEGACY_PATH, asset_methods())
}
