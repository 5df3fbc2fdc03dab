//! Error types for the corporation tracker.
//!
//! Domain errors (token lifecycle, configuration, EVE data) are aggregated with external library errors
//! into the single [`Error`] type. Every error can be classified into an [`ErrorKind`] which
//! decides how it is logged and whether the caller should expect it to clear up on its own.

pub mod auth;
pub mod config;
pub mod eve;
pub mod kind;

use thiserror::Error;

use crate::server::error::{auth::AuthError, config::ConfigError, eve::EveError};

pub use kind::ErrorKind;

/// Error returned by a failed OAuth2 refresh token grant against EVE SSO.
pub type OAuthTokenError = oauth2::RequestTokenError<
    oauth2::HttpClientError<oauth2::reqwest::Error>,
    oauth2::basic::BasicErrorResponse,
>;

/// Main error type for the corporation tracker.
///
/// Uses `thiserror`'s `#[from]` attribute so the underlying error types convert automatically
/// with the `?` operator. Services convert these into `bool`/`Option` results only at their
/// public edge, after logging them once via [`Error::log`].
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Token lifecycle error (rejected refresh token, missing credential).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// EVE Online data error (missing local corporation record).
    #[error(transparent)]
    EveError(#[from] EveError),
    /// Public ESI error returned by the `eve_esi` client.
    #[error(transparent)]
    EsiError(#[from] eve_esi::Error),
    /// Authenticated ESI request error (network failure or non-success status).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// Refresh token grant failed for a reason other than a rejected refresh token.
    #[error(transparent)]
    OAuthError(#[from] OAuthTokenError),
    /// Invalid OAuth2 endpoint URL.
    #[error(transparent)]
    UrlParseError(#[from] oauth2::url::ParseError),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Cron scheduler error (job registration, scheduler startup).
    #[error(transparent)]
    SchedulerError(#[from] tokio_cron_scheduler::JobSchedulerError),
}
