//! Request extractors and middleware enforcing access rules.
//!
//! - [`admin::RequireAdmin`] -- Requires the shared admin password header.
//! - [`preflight::reject_bare_options`] -- 405 for OPTIONS that is not a CORS preflight.

pub mod admin;
pub mod preflight;
