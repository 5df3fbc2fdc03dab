//! Database model type aliases and token descriptions for test fixtures.

use chrono::{DateTime, Duration, Utc};

pub type EveCorporationModel = entity::eve_corporation::Model;

pub type EveCharacterModel = entity::eve_character::Model;

pub type EveCharacterTokenModel = entity::eve_character_token::Model;

pub type DirectorCharacterModel = entity::director_character::Model;

pub type CorporationMemberModel = entity::corporation_member::Model;

/// Token pair to store for a character or director fixture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MockToken {
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: Option<DateTime<Utc>>,
}

impl MockToken {
    /// Token that is still valid for another 20 minutes.
    pub fn live(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: format!("{}_refresh", access_token),
            expires_at: Some(Utc::now() + Duration::minutes(20)),
        }
    }

    /// Token that expired 5 minutes ago and must be refreshed before use.
    pub fn expired(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: format!("{}_refresh", access_token),
            expires_at: Some(Utc::now() - Duration::minutes(5)),
        }
    }

    /// Token without an expiry, never refreshed.
    pub fn non_expiring(access_token: &str) -> Self {
        Self {
            access_token: access_token.to_string(),
            refresh_token: format!("{}_refresh", access_token),
            expires_at: None,
        }
    }
}
