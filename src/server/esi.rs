//! Authenticated ESI requests.
//!
//! `eve_esi` covers the public endpoints used for corporation and character lookups. The
//! director-scoped endpoints (member tracking, roles) and bulk name resolution go through
//! [`EsiGateway`], a thin `reqwest` wrapper sharing the ESI base URL.

use crate::server::{
    error::Error,
    model::esi::{CharacterRoles, MemberTracking, UniverseName},
    util::eve::ESI_UNIVERSE_NAMES_REQUEST_LIMIT,
};

#[derive(Clone)]
pub struct EsiGateway {
    http_client: reqwest::Client,
    esi_url: String,
}

impl EsiGateway {
    /// Creates a new instance of [`EsiGateway`] for the provided ESI base URL
    pub fn new(http_client: reqwest::Client, esi_url: impl Into<String>) -> Self {
        let esi_url = esi_url.into().trim_end_matches('/').to_string();

        Self {
            http_client,
            esi_url,
        }
    }

    /// Fetches the member tracking roster of a corporation
    ///
    /// Requires a token of a character holding the Director role within the corporation.
    pub async fn get_member_tracking(
        &self,
        corporation_id: i64,
        access_token: &str,
    ) -> Result<Vec<MemberTracking>, Error> {
        let url = format!("{}/corporations/{}/membertracking", self.esi_url, corporation_id);

        let roster = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<MemberTracking>>()
            .await?;

        Ok(roster)
    }

    /// Fetches the corporation roles of a character
    pub async fn get_character_roles(
        &self,
        character_id: i64,
        access_token: &str,
    ) -> Result<CharacterRoles, Error> {
        let url = format!("{}/characters/{}/roles", self.esi_url, character_id);

        let roles = self
            .http_client
            .get(url)
            .bearer_auth(access_token)
            .send()
            .await?
            .error_for_status()?
            .json::<CharacterRoles>()
            .await?;

        Ok(roles)
    }

    /// Resolves IDs to names, batching requests to ESI's limit of IDs per request
    ///
    /// Fails as a whole if any batch fails.
    pub async fn resolve_names(&self, ids: &[i64]) -> Result<Vec<UniverseName>, Error> {
        let url = format!("{}/universe/names", self.esi_url);
        let mut names = Vec::with_capacity(ids.len());

        for batch in ids.chunks(ESI_UNIVERSE_NAMES_REQUEST_LIMIT) {
            let resolved = self
                .http_client
                .post(&url)
                .json(batch)
                .send()
                .await?
                .error_for_status()?
                .json::<Vec<UniverseName>>()
                .await?;

            names.extend(resolved);
        }

        Ok(names)
    }
}
