//! OPTIONS handling in front of the CORS layer.
//!
//! `CorsLayer` answers every OPTIONS request with 200. Only genuine
//! preflights (an `Origin` plus `Access-Control-Request-Method`) are let
//! through; anything else gets the same 405 as other unsupported methods.

use axum::extract::Request;
use axum::http::header::{ACCESS_CONTROL_REQUEST_METHOD, ORIGIN};
use axum::http::{HeaderMap, Method};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::handlers::assets::method_not_allowed;

/// Whether the headers describe a CORS preflight request.
pub fn is_cors_preflight(headers: &HeaderMap) -> bool {
    headers.contains_key(ORIGIN) && headers.contains_key(ACCESS_CONTROL_REQUEST_METHOD)
}

/// Middleware: reject OPTIONS requests that are not CORS preflights.
pub async fn reject_bare_options(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS && !is_cors_preflight(request.headers()) {
        tracing::debug!(uri = %request.uri(), "Rejected non-preflight OPTIONS");
        return method_not_allowed().await.into_response();
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    #[test]
    fn preflight_needs_origin_and_request_method() {
        let mut headers = HeaderMap::new();
        assert!(!is_cors_preflight(&headers));

        headers.insert(ORIGIN, HeaderValue::from_static("http://localhost:5173"));
        assert!(!is_cors_preflight(&headers));

        headers.insert(ACCESS_CONTROL_REQUEST_METHOD, HeaderValue::from_static("POST"));
        assert!(is_cors_preflight(&headers));
    }
}
