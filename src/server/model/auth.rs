use crate::server::model::token::TokenPair;

/// Character authenticated through EVE SSO along with the token pair it was issued.
#[derive(Debug, Clone)]
pub struct EveAuthentication {
    pub character_id: i64,
    pub character_name: String,
    pub token: TokenPair,
}
