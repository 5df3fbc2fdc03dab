//! Test configuration constants for EVE ESI client setup.
//!
//! These are placeholder values, not real credentials.

/// User agent string for test ESI client requests.
pub static TEST_USER_AGENT: &str =
    "corp-tracker/1.0 (contact@example.com; +https://github.com/corp-tracker/corp-tracker)";

/// Mock ESI OAuth2 client ID for testing.
pub static TEST_ESI_CLIENT_ID: &str = "esi_client_id";

/// Mock ESI OAuth2 client secret for testing.
pub static TEST_ESI_CLIENT_SECRET: &str = "esi_client_secret";

/// Mock OAuth2 callback URL for testing.
pub static TEST_CALLBACK_URL: &str = "http://localhost:8080/auth/callback";

/// Path of the mock EVE SSO token endpoint.
pub static TEST_TOKEN_PATH: &str = "/v2/oauth/token";
