//! EVE Online-specific constants and helpers.

/// Corporation role required to read a corporation's member tracking.
pub const DIRECTOR_ROLE: &str = "Director";

/// ESI API hard limit for IDs per `/universe/names` request.
///
/// Requests with more IDs are rejected with 400 Bad Request, so name resolution is split
/// into batches of this size.
pub const ESI_UNIVERSE_NAMES_REQUEST_LIMIT: usize = 1000;

/// Returns true if the role list contains the Director role.
///
/// ESI role names are case-sensitive.
pub fn has_director_role(roles: &[String]) -> bool {
    roles.iter().any(|role| role == DIRECTOR_ROLE)
}
