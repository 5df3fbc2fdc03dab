use chrono::{DateTime, NaiveDateTime, Utc};

/// Access and refresh token pair for a principal.
///
/// `expires_at == None` means the access token never expires: it is always considered valid
/// and no refresh is ever attempted for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl TokenPair {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            expires_at,
        }
    }

    /// Builds a pair from the columns shared by the token tables.
    pub fn from_columns(
        access_token: String,
        refresh_token: String,
        expires_at: Option<NaiveDateTime>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_at: expires_at.map(|expires_at| expires_at.and_utc()),
        }
    }

    /// Returns true if the pair has an expiry and it is not after `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        match self.expires_at {
            Some(expires_at) => now >= expires_at,
            None => false,
        }
    }
}

/// Result of [`TokenService::refresh_access_token`](crate::server::service::token::TokenService::refresh_access_token).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Token had not expired, returned unchanged without contacting EVE SSO.
    Valid(TokenPair),
    /// Token was refreshed; the caller must persist it before using it.
    Refreshed(TokenPair),
    /// Refresh failed for a transient reason, the original pair is returned untouched.
    Transient(TokenPair),
}

impl RefreshOutcome {
    pub fn into_pair(self) -> TokenPair {
        match self {
            Self::Valid(pair) | Self::Refreshed(pair) | Self::Transient(pair) => pair,
        }
    }
}
