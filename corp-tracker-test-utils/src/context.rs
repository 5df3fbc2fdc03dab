//! Test context structure and utilities.
//!
//! The `TestContext` returned by `TestBuilder` holds an in-memory SQLite database, the mock
//! HTTP server standing in for both ESI and EVE SSO, and an ESI client configured to use it.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{
        TEST_CALLBACK_URL, TEST_ESI_CLIENT_ID, TEST_ESI_CLIENT_SECRET, TEST_TOKEN_PATH,
        TEST_USER_AGENT,
    },
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// ```ignore
/// let mut test = TestBuilder::new().with_tracking_tables().build().await?;
///
/// let corporation = test.eve().insert_mock_corporation(98000001).await?;
/// let gateway = EsiGateway::new(reqwest::Client::new(), test.esi_url());
///
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
    /// ESI client configured to use mock server
    pub esi_client: eve_esi::Client,

    /// Mock HTTP server for ESI and EVE SSO endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context
    /// - `Err(TestError::EsiError)` - ESI client or config builder failed
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let mock_server = Server::new_async().await;
        let mock_server_url = mock_server.url();

        let esi_config = eve_esi::Config::builder()
            .esi_url(&mock_server_url)
            .token_url(&format!("{}{}", mock_server_url, TEST_TOKEN_PATH))
            .jwk_url(&format!("{}/oauth/jwks", mock_server_url))
            .build()?;

        let esi_client = eve_esi::Client::builder()
            .config(esi_config)
            .user_agent(TEST_USER_AGENT)
            .client_id(TEST_ESI_CLIENT_ID)
            .client_secret(TEST_ESI_CLIENT_SECRET)
            .callback_url(TEST_CALLBACK_URL)
            .build()?;

        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            server: mock_server,
            db,
            esi_client,
            mocks: Vec::new(),
        })
    }

    /// Base URL of the mock ESI server.
    pub fn esi_url(&self) -> String {
        self.server.url()
    }

    /// URL of the mock EVE SSO token endpoint.
    pub fn token_url(&self) -> String {
        format!("{}{}", self.server.url(), TEST_TOKEN_PATH)
    }

    /// Create database tables from schema statements.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}
