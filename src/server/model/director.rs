/// Identity stored alongside a director's token pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorIdentity {
    pub character_id: i64,
    pub character_name: String,
    pub corporation_id: i64,
    pub corporation_name: String,
    pub corporation_ticker: String,
}

/// Valid access token for a director, annotated with the director's character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorAccessToken {
    pub director_index: i32,
    pub character_id: i64,
    pub access_token: String,
}
