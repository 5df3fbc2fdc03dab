use chrono::{DateTime, Utc};
use eve_esi::model::{character::Character, corporation::Corporation};
use serde_json::{json, Value};

/// Create a mock corporation with default test values.
///
/// # Arguments
/// - `alliance_id` - Optional alliance ID the corporation belongs to
pub fn mock_corporation(alliance_id: Option<i64>) -> Corporation {
    Corporation {
        alliance_id,
        ceo_id: 2114794365,
        creator_id: 2114794365,
        date_founded: Some(
            DateTime::parse_from_rfc3339("2024-10-07T21:43:09Z")
                .unwrap()
                .with_timezone(&Utc),
        ),
        description: None,
        home_station_id: Some(60003760),
        member_count: 21,
        name: "The Order of Autumn".to_string(),
        shares: Some(1000),
        tax_rate: 0.0,
        ticker: "F4LL.".to_string(),
        url: Some("https://autumn-order.com".to_string()),
        war_eligible: Some(true),
        faction_id: None,
    }
}

/// Create a mock character with default test values.
///
/// # Arguments
/// - `corporation_id` - The corporation ID the character belongs to
pub fn mock_character(corporation_id: i64) -> Character {
    Character {
        alliance_id: None,
        birthday: DateTime::parse_from_rfc3339("2018-12-20T16:11:54Z")
            .unwrap()
            .with_timezone(&Utc),
        bloodline_id: 7,
        corporation_id,
        description: Some("description".to_string()),
        faction_id: None,
        gender: "male".to_string(),
        name: "Hyziri".to_string(),
        race_id: 8,
        security_status: Some(-0.100373643),
        title: Some("Title".to_string()),
    }
}

/// Create a member tracking entry as returned by
/// `GET /corporations/{corporation_id}/membertracking`.
pub fn mock_member_tracking(character_id: i64, location_id: i64, ship_type_id: i64) -> Value {
    json!({
        "character_id": character_id,
        "base_id": 60003760,
        "location_id": location_id,
        "ship_type_id": ship_type_id,
        "logon_date": "2025-10-01T18:30:00Z",
        "logoff_date": "2025-10-01T21:05:00Z",
        "start_date": "2024-10-08T00:00:00Z"
    })
}

/// Create a name entry as returned by `POST /universe/names`.
pub fn mock_universe_name(id: i64, name: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "category": "character"
    })
}
