use chrono::{DateTime, Utc};
use corp_tracker_test_utils::prelude::*;

use crate::server::model::token::TokenPair;


/// Expiry with whole seconds so it survives a round trip through SQLite unchanged
fn fixed_expiry() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2025-10-01T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}
