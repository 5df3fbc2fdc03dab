//! Payloads of the authenticated ESI endpoints which `eve_esi` does not cover.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Entry of `GET /corporations/{corporation_id}/membertracking`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberTracking {
    pub character_id: i64,
    pub base_id: Option<i64>,
    pub location_id: Option<i64>,
    pub logoff_date: Option<DateTime<Utc>>,
    pub logon_date: Option<DateTime<Utc>>,
    pub ship_type_id: Option<i64>,
    pub start_date: Option<DateTime<Utc>>,
}

/// Entry of `POST /universe/names`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UniverseName {
    pub id: i64,
    pub name: String,
    pub category: String,
}

/// Response of `GET /characters/{character_id}/roles`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CharacterRoles {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub roles_at_base: Vec<String>,
    #[serde(default)]
    pub roles_at_hq: Vec<String>,
    #[serde(default)]
    pub roles_at_other: Vec<String>,
}
