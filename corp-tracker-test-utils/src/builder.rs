//! Declarative test builder.
//!
//! Configuration methods only queue work; tables, fixtures and mock endpoints are created
//! during the final `build()` call.

use eve_esi::model::{character::Character, corporation::Corporation};
use mockito::Mock;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};
use serde_json::Value;

use crate::{error::TestError, model::MockToken, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_tracking_tables: bool,

    // Database fixtures to insert
    corporations: Vec<i64>,
    characters: Vec<(i64, i64, Option<MockToken>)>, // (char_id, corp_id, token)
    directors: Vec<(i32, i64, i64, Option<MockToken>)>, // (index, char_id, corp_id, token)
    members: Vec<(i64, i64, Option<String>)>,       // (corp_id, char_id, name)

    // Mock endpoints to create
    mock_builders: Vec<Box<dyn FnOnce(&mut mockito::ServerGuard) -> Mock>>,

    // Pre-configured endpoint shortcuts
    token_endpoints: Vec<(Value, usize)>,
    token_error_endpoints: Vec<(usize, String, usize)>, // (status, error, expected_requests)
    corporation_endpoints: Vec<(i64, Corporation, usize)>,
    character_endpoints: Vec<(i64, Character, usize)>,
    character_roles_endpoints: Vec<(i64, Vec<&'static str>, usize)>,
    character_roles_error_endpoints: Vec<(i64, usize, usize)>, // (char_id, status, expected_requests)
    member_tracking_endpoints: Vec<(i64, Vec<Value>, usize)>,
    member_tracking_error_endpoints: Vec<(i64, usize, usize)>, // (corp_id, status, expected_requests)
    universe_names_endpoints: Vec<(Vec<Value>, usize)>,
    universe_names_error_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_tracking_tables: false,
            corporations: Vec::new(),
            characters: Vec::new(),
            directors: Vec::new(),
            members: Vec::new(),
            mock_builders: Vec::new(),
            token_endpoints: Vec::new(),
            token_error_endpoints: Vec::new(),
            corporation_endpoints: Vec::new(),
            character_endpoints: Vec::new(),
            character_roles_endpoints: Vec::new(),
            character_roles_error_endpoints: Vec::new(),
            member_tracking_endpoints: Vec::new(),
            member_tracking_error_endpoints: Vec::new(),
            universe_names_endpoints: Vec::new(),
            universe_names_error_endpoints: Vec::new(),
        }
    }

    /// Add every table of the tracking schema to the test database.
    ///
    /// Creates EveCorporation, EveCharacter, EveCharacterToken, DirectorCharacter,
    /// DirectorToken and CorporationMember.
    pub fn with_tracking_tables(mut self) -> Self {
        self.include_tracking_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use corp_tracker_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), corp_tracker_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(EveCorporation)
    ///     .with_table(EveCharacter)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert mock corporation into database.
    pub fn with_mock_corporation(mut self, corporation_id: i64) -> Self {
        self.corporations.push(corporation_id);
        self
    }

    /// Insert mock character into database, creating its corporation if needed.
    pub fn with_mock_character(mut self, character_id: i64, corporation_id: i64) -> Self {
        self.characters.push((character_id, corporation_id, None));
        self
    }

    /// Insert mock character along with a stored token pair.
    pub fn with_mock_character_token(
        mut self,
        character_id: i64,
        corporation_id: i64,
        token: MockToken,
    ) -> Self {
        self.characters
            .push((character_id, corporation_id, Some(token)));
        self
    }

    /// Insert a director identity and, if provided, its token pair.
    ///
    /// # Arguments
    /// - `director_index` - Index of the director in the pool
    /// - `character_id` - EVE character ID of the director
    /// - `corporation_id` - EVE corporation ID of the director
    /// - `token` - Token pair, `None` to insert the identity record only
    pub fn with_mock_director(
        mut self,
        director_index: i32,
        character_id: i64,
        corporation_id: i64,
        token: Option<MockToken>,
    ) -> Self {
        self.directors
            .push((director_index, character_id, corporation_id, token));
        self
    }

    /// Insert a corporation member record, creating the corporation if needed.
    pub fn with_mock_member(
        mut self,
        corporation_id: i64,
        character_id: i64,
        name: Option<&str>,
    ) -> Self {
        self.members
            .push((corporation_id, character_id, name.map(str::to_string)));
        self
    }

    /// Add mock EVE SSO token endpoint returning a successful grant.
    ///
    /// # Arguments
    /// - `response` - Token response, see [`auth_factory::mock_token_response`](crate::fixtures::auth::factory::mock_token_response)
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn with_token_endpoint(mut self, response: Value, expected_requests: usize) -> Self {
        self.token_endpoints.push((response, expected_requests));
        self
    }

    /// Add mock EVE SSO token endpoint rejecting the grant with an OAuth2 error code.
    pub fn with_token_error_endpoint(
        mut self,
        status: usize,
        error: &str,
        expected_requests: usize,
    ) -> Self {
        self.token_error_endpoints
            .push((status, error.to_string(), expected_requests));
        self
    }

    /// Add mock endpoint at `/corporations/{corporation_id}`.
    pub fn with_corporation_endpoint(
        mut self,
        corporation_id: i64,
        corporation: Corporation,
        expected_requests: usize,
    ) -> Self {
        self.corporation_endpoints
            .push((corporation_id, corporation, expected_requests));
        self
    }

    /// Add mock endpoint at `/characters/{character_id}`.
    pub fn with_character_endpoint(
        mut self,
        character_id: i64,
        character: Character,
        expected_requests: usize,
    ) -> Self {
        self.character_endpoints
            .push((character_id, character, expected_requests));
        self
    }

    /// Add mock endpoint at `/characters/{character_id}/roles`.
    pub fn with_character_roles_endpoint(
        mut self,
        character_id: i64,
        roles: Vec<&'static str>,
        expected_requests: usize,
    ) -> Self {
        self.character_roles_endpoints
            .push((character_id, roles, expected_requests));
        self
    }

    /// Add mock endpoint at `/characters/{character_id}/roles` failing with `status`.
    pub fn with_character_roles_error_endpoint(
        mut self,
        character_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.character_roles_error_endpoints
            .push((character_id, status, expected_requests));
        self
    }

    /// Add mock endpoint at `/corporations/{corporation_id}/membertracking`.
    pub fn with_member_tracking_endpoint(
        mut self,
        corporation_id: i64,
        entries: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.member_tracking_endpoints
            .push((corporation_id, entries, expected_requests));
        self
    }

    /// Add mock endpoint at `/corporations/{corporation_id}/membertracking` failing with `status`.
    pub fn with_member_tracking_error_endpoint(
        mut self,
        corporation_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.member_tracking_error_endpoints
            .push((corporation_id, status, expected_requests));
        self
    }

    /// Add mock endpoint at `/universe/names`.
    pub fn with_universe_names_endpoint(
        mut self,
        names: Vec<Value>,
        expected_requests: usize,
    ) -> Self {
        self.universe_names_endpoints
            .push((names, expected_requests));
        self
    }

    /// Add mock endpoint at `/universe/names` failing with `status`.
    pub fn with_universe_names_error_endpoint(
        mut self,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.universe_names_error_endpoints
            .push((status, expected_requests));
        self
    }

    /// Add a custom mock endpoint with full control over the mockito server.
    pub fn with_mock_endpoint<F>(mut self, setup: F) -> Self
    where
        F: FnOnce(&mut mockito::ServerGuard) -> Mock + 'static,
    {
        self.mock_builders.push(Box::new(setup));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables (tracking tables if specified, then custom tables)
    /// 2. Inserts database fixtures (corporations, characters & tokens, directors, members)
    /// 3. Creates mock HTTP endpoints (custom endpoints first, then shortcuts)
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    /// - `Err(TestError::EsiError)` - Mock ESI client initialization failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;

        // 1. Create tables
        let mut all_tables = Vec::new();

        if self.include_tracking_tables {
            let schema = Schema::new(sea_orm::DbBackend::Sqlite);
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::EveCorporation),
                schema.create_table_from_entity(entity::prelude::EveCharacter),
                schema.create_table_from_entity(entity::prelude::EveCharacterToken),
                schema.create_table_from_entity(entity::prelude::DirectorCharacter),
                schema.create_table_from_entity(entity::prelude::DirectorToken),
                schema.create_table_from_entity(entity::prelude::CorporationMember),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for corporation_id in self.corporations {
            setup.eve().insert_mock_corporation(corporation_id).await?;
        }

        for (character_id, corporation_id, token) in self.characters {
            let character = setup
                .eve()
                .insert_mock_character(character_id, corporation_id)
                .await?;

            if let Some(token) = token {
                setup
                    .eve()
                    .insert_mock_character_token(&character, &token)
                    .await?;
            }
        }

        for (director_index, character_id, corporation_id, token) in self.directors {
            setup
                .director()
                .insert_mock_director(director_index, character_id, corporation_id, token.as_ref())
                .await?;
        }

        for (corporation_id, character_id, name) in self.members {
            setup
                .director()
                .insert_mock_member(corporation_id, character_id, name.as_deref())
                .await?;
        }

        // 3. Create mock endpoints
        // Custom endpoints are created first so tests can register an error response ahead of
        // a success response for the same path
        let mut mocks = Vec::new();

        for builder in self.mock_builders {
            mocks.push(builder(&mut setup.server));
        }

        for (response, expected) in self.token_endpoints {
            mocks.push(setup.auth().create_token_endpoint(response, expected));
        }

        for (status, error, expected) in self.token_error_endpoints {
            mocks.push(
                setup
                    .auth()
                    .create_token_error_endpoint(status, &error, expected),
            );
        }

        for (corporation_id, corporation, expected) in self.corporation_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_corporation_endpoint(corporation_id, corporation, expected),
            );
        }

        for (character_id, character, expected) in self.character_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_character_endpoint(character_id, character, expected),
            );
        }

        for (character_id, roles, expected) in self.character_roles_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_character_roles_endpoint(character_id, roles, expected),
            );
        }

        for (character_id, status, expected) in self.character_roles_error_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_character_roles_error_endpoint(character_id, status, expected),
            );
        }

        for (corporation_id, entries, expected) in self.member_tracking_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_member_tracking_endpoint(corporation_id, entries, expected),
            );
        }

        for (corporation_id, status, expected) in self.member_tracking_error_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_member_tracking_error_endpoint(corporation_id, status, expected),
            );
        }

        for (names, expected) in self.universe_names_endpoints {
            mocks.push(setup.eve().create_universe_names_endpoint(names, expected));
        }

        for (status, expected) in self.universe_names_error_endpoints {
            mocks.push(
                setup
                    .eve()
                    .create_universe_names_error_endpoint(status, expected),
            );
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
