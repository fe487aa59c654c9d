//! Shared-secret admin credential check.
//!
//! Write operations are gated by a single password sent in the
//! [`ADMIN_PASSWORD_HEADER`] header. The comparison is a plain equality
//! check on the trimmed header value.

use crate::error::CoreError;

/// Request header carrying the admin password.
pub const ADMIN_PASSWORD_HEADER: &str = "x-admin-password";

/// Message returned for every rejected credential.
pub const UNAUTHORIZED_MESSAGE: &str = "Yetkisiz işlem (şifre).";

/// Verify a provided admin password against the configured secret.
///
/// Fails when the secret is unconfigured (absent or blank), when no
/// password was provided, or when the trimmed value does not match.
pub fn verify_admin_password(
    configured: Option<&str>,
    provided: Option<&str>,
) -> Result<(), CoreError> {
    let configured = configured.filter(|s| !s.is_empty());
    let provided = provided.map(str::trim).unwrap_or_default();

    match configured {
        Some(secret) if !provided.is_empty() && provided == secret => Ok(()),
        _ => Err(CoreError::Unauthorized(UNAUTHORIZED_MESSAGE.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn matching_password_is_accepted() {
        assert!(verify_admin_password(Some("hunter2"), Some("hunter2")).is_ok());
    }

    #[test]
    fn provided_value_is_trimmed() {
        assert!(verify_admin_password(Some("hunter2"), Some("  hunter2\t")).is_ok());
    }

    #[test]
    fn mismatched_password_is_rejected() {
        assert_matches!(
            verify_admin_password(Some("hunter2"), Some("hunter3")),
            Err(CoreError::Unauthorized(msg)) if msg == UNAUTHORIZED_MESSAGE
        );
    }

    #[test]
    fn missing_header_is_rejected() {
        assert_matches!(
            verify_admin_password(Some("hunter2"), None),
            Err(CoreError::Unauthorized(_))
        );
    }

    #[test]
    fn unconfigured_secret_rejects_everything() {
        assert_matches!(
            verify_admin_password(None, Some("anything")),
            Err(CoreError::Unauthorized(_))
        );
        assert_matches!(
            verify_admin_password(Some(""), Some("")),
            Err(CoreError::Unauthorized(_))
        );
        assert_matches!(verify_admin_password(None, None), Err(CoreError::Unauthorized(_)));
    }

    #[test]
    fn whitespace_only_header_is_rejected() {
        assert_matches!(
            verify_admin_password(Some("hunter2"), Some("   ")),
            Err(CoreError::Unauthorized(_))
        );
    }
}
