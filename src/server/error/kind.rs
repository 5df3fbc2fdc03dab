use oauth2::{basic::BasicErrorResponseType, RequestTokenError};
use sea_orm::DbErr;

use super::{auth::AuthError, Error};

/// Classification of an [`Error`] used to decide how it is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Refresh token is dead; never retried, the credential must be re-authorized.
    AuthExpired,
    /// Network failure, server error or connection problem; the next pass may succeed.
    Transient,
    /// Durable write or query failed.
    Persistence,
    /// Expected absence of a credential or configuration entry.
    NotConfigured,
    /// Bad request, invalid configuration or a bug.
    Fatal,
}

impl Error {
    /// Determine the error kind based upon the application error type
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthError(AuthError::RefreshTokenExpired(_)) => ErrorKind::AuthExpired,
            Self::AuthError(AuthError::CredentialNotFound(_))
            | Self::AuthError(AuthError::DirectorNotConfigured(_)) => ErrorKind::NotConfigured,

            Self::EsiError(eve_esi::Error::ReqwestError(reqwest_error)) => {
                reqwest_kind(reqwest_error)
            }
            Self::ReqwestError(reqwest_error) => reqwest_kind(reqwest_error),
            // OAuth, parsing and other ESI client errors
            Self::EsiError(_) => ErrorKind::Fatal,

            Self::OAuthError(oauth_error) => match oauth_error {
                RequestTokenError::ServerResponse(response) if is_dead_grant(response.error()) => {
                    ErrorKind::AuthExpired
                }
                _ => ErrorKind::Transient,
            },

            Self::DbErr(db_err) => match db_err {
                DbErr::ConnectionAcquire(_) | DbErr::Conn(_) => ErrorKind::Transient,
                _ => ErrorKind::Persistence,
            },

            Self::EveError(_) => ErrorKind::Fatal,
            Self::ConfigError(_) => ErrorKind::Fatal,
            Self::UrlParseError(_) => ErrorKind::Fatal,
            Self::SchedulerError(_) => ErrorKind::Fatal,
        }
    }

    /// Logs the error once, at a level matching its [`ErrorKind`].
    ///
    /// `context` describes the operation that failed, e.g. `"Failed to fetch member tracking"`.
    pub fn log(&self, context: &str) {
        match self.kind() {
            ErrorKind::NotConfigured => tracing::debug!(error = %self, "{}", context),
            ErrorKind::AuthExpired | ErrorKind::Transient => {
                tracing::warn!(error = %self, "{}", context)
            }
            ErrorKind::Persistence | ErrorKind::Fatal => {
                tracing::error!(error = %self, "{}", context)
            }
        }
    }
}

/// Returns true if EVE SSO reported the refresh token itself as unusable.
pub(crate) fn is_dead_grant(error: &BasicErrorResponseType) -> bool {
    match error {
        BasicErrorResponseType::InvalidGrant => true,
        BasicErrorResponseType::Extension(code) => code == "invalid_token",
        _ => false,
    }
}

fn reqwest_kind(reqwest_error: &reqwest::Error) -> ErrorKind {
    match reqwest_error.status() {
        // ESI is temporarily unavailable
        Some(status) if status.is_server_error() => ErrorKind::Transient,
        // Invalid request or missing scope, retrying won't help
        Some(_) => ErrorKind::Fatal,
        // Network error or connection issue
        None => ErrorKind::Transient,
    }
}
