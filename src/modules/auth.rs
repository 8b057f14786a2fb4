//! Authentication token lookup for GitHub operations

use std::env;

use crate::modules::error::AuthError;

/// Environment variable holding the personal access token.
pub const AUTH_TOKEN_VAR: &str = "GITHUB_TOKEN";

/// Read the token from [`AUTH_TOKEN_VAR`].
///
/// The value is read on every call and returned exactly as set. An unset,
/// empty or non-unicode variable is reported as [`AuthError::MissingToken`],
/// whose message tells the user what to export.
pub fn require_auth_token() -> Result<String, AuthError> {
    resolve_auth_token(env::var(AUTH_TOKEN_VAR).ok())
}

/// Validate a token value that was looked up elsewhere.
pub fn resolve_auth_token(value: Option<String>) -> Result<String, AuthError> {
    match value {
        Some(token) if !token.is_empty() => Ok(token),
        _ => Err(AuthError::MissingToken {
            var: AUTH_TOKEN_VAR,
        }),
    }
}
