//! Handlers for the equipment inventory.
//!
//! Listing is public; upsert and delete require the admin password.

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use envanter_core::assets::{delete_target, parse_payload, query_id, ID_REQUIRED_MESSAGE};
use envanter_core::error::CoreError;
use envanter_db::repositories::AssetRepo;

use crate::error::AppResult;
use crate::middleware::admin::RequireAdmin;
use crate::response::OkResponse;
use crate::state::AppState;

/// GET /
///
/// All assets, dated first (newest date first), then undated.
pub async fn list_assets(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let assets = AssetRepo::list(&state.pool).await?;

    Ok(Json(assets))
}

/// POST /
///
/// Insert or fully overwrite an asset. Admin only.
pub async fn upsert_asset(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let input = parse_payload(&body)?.normalize()?;

    let asset = AssetRepo::upsert(&state.pool, &input).await?;

    tracing::info!(asset_id = %asset.id, tur = %asset.tur, "Asset upserted");

    Ok(Json(asset))
}

/// DELETE /?id={id}
///
/// Delete an asset by id taken from the query string or the JSON body.
/// Succeeds whether or not the row existed. Admin only.
///
/// The query is read as raw pairs so a repeated `id` is joined rather than
/// rejected.
pub async fn delete_asset(
    _admin: RequireAdmin,
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
    body: Bytes,
) -> AppResult<impl IntoResponse> {
    let Query(pairs) =
        query.map_err(|_| CoreError::Validation(ID_REQUIRED_MESSAGE.to_string()))?;

    // Only the id matters here; an unreadable body is the same as none.
    let payload = parse_payload(&body).unwrap_or_default();
    let id = delete_target(query_id(&pairs).as_deref(), &payload)?;

    let deleted = AssetRepo::delete(&state.pool, &id).await?;

    tracing::info!(asset_id = %id, deleted, "Asset delete requested");

    Ok(Json(OkResponse::ok()))
}

/// Any method other than GET, POST or DELETE.
pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
