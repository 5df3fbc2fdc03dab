use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// EVE SSO rejected the refresh token; the credential must be re-authorized.
    #[error("Refresh token was rejected by EVE SSO: {0}")]
    RefreshTokenExpired(String),
    /// No token pair is stored for the principal, or the stored one has no access token.
    #[error("No usable token is stored for {0}")]
    CredentialNotFound(String),
    /// Director entry is missing or does not reference a valid character.
    #[error("Director {0} is not configured")]
    DirectorNotConfigured(i32),
}
