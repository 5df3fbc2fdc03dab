use oauth2::{
    basic::BasicClient, ClientId, ClientSecret, EndpointNotSet, EndpointSet, TokenUrl,
};
use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    esi::EsiGateway,
    model::app::AppState,
    service::token::TokenService,
};

/// OAuth2 client for EVE SSO with only the token endpoint configured
pub type EveOAuthClient =
    BasicClient<EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointNotSet, EndpointSet>;

/// Build and configure the ESI client with the provided credentials
pub fn build_esi_client(config: &Config) -> Result<eve_esi::Client, Error> {
    let esi_config = eve_esi::Config::builder()
        .esi_url(&config.esi_url)
        .token_url(&config.esi_token_url)
        .build()?;

    let esi_client = eve_esi::Client::builder()
        .config(esi_config)
        .user_agent(&config.user_agent)
        .client_id(&config.esi_client_id)
        .client_secret(&config.esi_client_secret)
        .callback_url(&config.esi_callback_url)
        .build()?;

    Ok(esi_client)
}

/// Build the HTTP client used for authenticated ESI requests
pub fn build_http_client(user_agent: &str) -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder().user_agent(user_agent).build()?;

    Ok(http_client)
}

/// Build the HTTP client used for EVE SSO token requests
///
/// Redirects are disabled to prevent SSRF through the token endpoint.
pub fn build_oauth_http_client(user_agent: &str) -> Result<reqwest::Client, Error> {
    let http_client = reqwest::Client::builder()
        .user_agent(user_agent)
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(http_client)
}

/// Build the EVE SSO OAuth2 client used for refresh token grants
pub fn build_oauth_client(
    client_id: &str,
    client_secret: &str,
    token_url: &str,
) -> Result<EveOAuthClient, Error> {
    let oauth_client = BasicClient::new(ClientId::new(client_id.to_string()))
        .set_client_secret(ClientSecret::new(client_secret.to_string()))
        .set_token_uri(TokenUrl::new(token_url.to_string())?);

    Ok(oauth_client)
}

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build all clients and connect to the database
pub async fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let esi_client = build_esi_client(config)?;
    let esi_gateway = EsiGateway::new(build_http_client(&config.user_agent)?, &config.esi_url);
    let token_service = TokenService::new(
        build_oauth_client(
            &config.esi_client_id,
            &config.esi_client_secret,
            &config.esi_token_url,
        )?,
        build_oauth_http_client(&config.user_agent)?,
    );
    let db = connect_to_database(config).await?;

    Ok(AppState {
        db,
        esi_client,
        esi_gateway,
        token_service,
    })
}
