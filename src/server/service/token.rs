//! OAuth token refresh with lazy renewal.
//!
//! A token pair is only refreshed once its expiry has passed. A refreshed pair must be
//! durably saved before its access token is handed out, otherwise it is not used at all.

use chrono::Utc;
use oauth2::{RefreshToken, RequestTokenError, TokenResponse};

use crate::server::{
    data::token::TokenStore,
    error::{auth::AuthError, kind::is_dead_grant, Error},
    model::token::{RefreshOutcome, TokenPair},
    startup::EveOAuthClient,
};

#[derive(Clone)]
pub struct TokenService {
    oauth_client: EveOAuthClient,
    http_client: reqwest::Client,
}

impl TokenService {
    /// Creates a new instance of [`TokenService`]
    ///
    /// `http_client` should not follow redirects, see
    /// [`build_oauth_http_client`](crate::server::startup::build_oauth_http_client).
    pub fn new(oauth_client: EveOAuthClient, http_client: reqwest::Client) -> Self {
        Self {
            oauth_client,
            http_client,
        }
    }

    /// Refreshes the token pair if it has expired
    ///
    /// # Returns
    /// - `Ok(RefreshOutcome::Valid)` - Pair has no expiry or has not expired, EVE SSO was not contacted
    /// - `Ok(RefreshOutcome::Refreshed)` - New pair, the refresh token is kept if EVE SSO didn't rotate it
    /// - `Ok(RefreshOutcome::Transient)` - Refresh failed for any other reason, original pair returned
    /// - `Err(Error::AuthError(AuthError::RefreshTokenExpired))` - EVE SSO rejected the refresh token
    pub async fn refresh_access_token(&self, token: &TokenPair) -> Result<RefreshOutcome, Error> {
        if !token.is_expired(Utc::now()) {
            return Ok(RefreshOutcome::Valid(token.clone()));
        }

        let result = self
            .oauth_client
            .exchange_refresh_token(&RefreshToken::new(token.refresh_token.clone()))
            .request_async(&self.http_client)
            .await;

        match result {
            Ok(response) => {
                let expires_at = response
                    .expires_in()
                    .and_then(|expires_in| chrono::Duration::from_std(expires_in).ok())
                    .map(|expires_in| Utc::now() + expires_in);

                let refresh_token = response
                    .refresh_token()
                    .map(|refresh_token| refresh_token.secret().clone())
                    .unwrap_or_else(|| token.refresh_token.clone());

                Ok(RefreshOutcome::Refreshed(TokenPair {
                    access_token: response.access_token().secret().clone(),
                    refresh_token,
                    expires_at,
                }))
            }
            Err(RequestTokenError::ServerResponse(response)) if is_dead_grant(response.error()) => {
                Err(AuthError::RefreshTokenExpired(response.to_string()).into())
            }
            Err(e) => {
                Error::from(e).log("Failed to refresh access token, keeping the existing token");

                Ok(RefreshOutcome::Transient(token.clone()))
            }
        }
    }

    /// Returns a valid access token for the principal, refreshing and saving it if needed
    ///
    /// Returns `None` if no token is stored, EVE SSO rejected the refresh token or the refreshed
    /// token could not be saved. A rejected credential is left in place.
    pub async fn get_valid_access_token<S>(&self, store: &S, principal: S::Principal) -> Option<String>
    where
        S: TokenStore + Sync,
    {
        match self.try_get_valid_access_token(store, principal).await {
            Ok(access_token) => Some(access_token),
            Err(e) => {
                e.log(&format!(
                    "Unable to provide an access token for {} {}",
                    S::PRINCIPAL_KIND,
                    principal
                ));

                None
            }
        }
    }

    async fn try_get_valid_access_token<S>(
        &self,
        store: &S,
        principal: S::Principal,
    ) -> Result<String, Error>
    where
        S: TokenStore + Sync,
    {
        let token = store
            .load_token(principal)
            .await?
            .filter(|token| !token.access_token.is_empty())
            .ok_or_else(|| {
                AuthError::CredentialNotFound(format!("{} {}", S::PRINCIPAL_KIND, principal))
            })?;

        let refreshed = self.refresh_access_token(&token).await?.into_pair();

        if refreshed.access_token != token.access_token {
            store.save_token(principal, &refreshed).await?;

            tracing::debug!(
                principal = %principal,
                "Saved refreshed {} access token",
                S::PRINCIPAL_KIND
            );
        }

        Ok(refreshed.access_token)
    }
}
