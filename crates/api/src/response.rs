//! Small response bodies shared by handlers.

use serde::Serialize;

/// `{ "ok": true }` acknowledgement for operations with no payload.
#[derive(Debug, Serialize)]
pub struct OkResponse {
    pub ok: bool,
}

impl OkResponse {
    pub const fn ok() -> Self {
        Self { ok: true }
    }
}
