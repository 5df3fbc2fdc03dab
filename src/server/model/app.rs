use sea_orm::DatabaseConnection;

use crate::server::{esi::EsiGateway, service::token::TokenService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub esi_client: eve_esi::Client,
    pub esi_gateway: EsiGateway,
    pub token_service: TokenService,
}
