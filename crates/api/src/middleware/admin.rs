//! Shared-password admin extractor for write endpoints.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use envanter_core::admin::{verify_admin_password, ADMIN_PASSWORD_HEADER};

use crate::error::AppError;
use crate::state::AppState;

/// Proof that the request carried the configured admin password.
///
/// Runs before any body extractor, so rejected writes never reach the
/// database:
///
/// ```ignore
/// async fn write(_admin: RequireAdmin, State(state): State<AppState>) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let provided = parts
            .headers
            .get(ADMIN_PASSWORD_HEADER)
            .and_then(|v| v.to_str().ok());

        verify_admin_password(state.config.admin_password.as_deref(), provided).map_err(|e| {
            tracing::warn!(method = %parts.method, uri = %parts.uri, "Rejected admin credential");
            AppError::Core(e)
        })?;

        Ok(RequireAdmin)
    }
}
