//! Factory functions for EVE SSO token endpoint responses.

use serde_json::{json, Value};

/// Create a successful refresh token grant response.
///
/// # Arguments
/// - `access_token` - New access token
/// - `refresh_token` - Refresh token to return, `None` to omit it like a provider reusing the old one
/// - `expires_in` - Lifetime of the new access token in seconds
pub fn mock_token_response(
    access_token: &str,
    refresh_token: Option<&str>,
    expires_in: i64,
) -> Value {
    let mut response = json!({
        "access_token": access_token,
        "token_type": "Bearer",
        "expires_in": expires_in
    });

    if let Some(refresh_token) = refresh_token {
        response["refresh_token"] = json!(refresh_token);
    }

    response
}

/// Create an OAuth2 error response, e.g. `invalid_grant` for a revoked refresh token.
pub fn mock_token_error(error: &str) -> Value {
    json!({
        "error": error,
        "error_description": "mock EVE SSO error"
    })
}
