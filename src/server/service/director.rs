//! Pool of numbered director credentials.
//!
//! Directors are characters holding the Director role whose tokens are used to poll
//! corporation data without an interactive session. Each director is stored under an index
//! one greater than the highest index in use, so indexes of removed directors leave gaps.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::director::DirectorRepository,
    error::{auth::AuthError, Error},
    esi::EsiGateway,
    model::{
        auth::EveAuthentication,
        db::DirectorCharacterModel,
        director::{DirectorAccessToken, DirectorIdentity},
        token::TokenPair,
    },
    service::{eve::corporation::CorporationService, token::TokenService},
    util::eve::has_director_role,
};

pub struct DirectorService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
    esi_gateway: &'a EsiGateway,
    token_service: &'a TokenService,
}

impl<'a> DirectorService<'a> {
    /// Creates a new instance of [`DirectorService`]
    pub fn new(
        db: &'a DatabaseConnection,
        esi_client: &'a eve_esi::Client,
        esi_gateway: &'a EsiGateway,
        token_service: &'a TokenService,
    ) -> Self {
        Self {
            db,
            esi_client,
            esi_gateway,
            token_service,
        }
    }

    /// Stores a director under the next free index and returns that index
    ///
    /// Identity and token are committed together.
    pub async fn store(&self, identity: DirectorIdentity, token: &TokenPair) -> Result<i32, Error> {
        let txn = self.db.begin().await?;
        let director_repo = DirectorRepository::new(&txn);

        let director_index = director_repo.max_index().await?.unwrap_or(0) + 1;
        director_repo.create(director_index, identity, token).await?;

        txn.commit().await?;

        Ok(director_index)
    }

    /// Removes a director's identity and token
    ///
    /// A director without a token record is removed all the same.
    pub async fn remove(&self, director_index: i32) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let director_repo = DirectorRepository::new(&txn);

        if director_repo.delete_token(director_index).await? == 0 {
            tracing::debug!(director_index, "Director has no token record to remove");
        }

        if director_repo.delete_character(director_index).await? == 0 {
            tracing::debug!(director_index, "Director has no identity record to remove");
        }

        txn.commit().await?;

        Ok(())
    }

    /// Returns a valid access token of the director at `director_index`
    ///
    /// Returns `None` if the director is not configured, has no usable token, its refresh
    /// token was rejected or a refreshed token could not be saved.
    pub async fn refresh_by_index(&self, director_index: i32) -> Option<DirectorAccessToken> {
        let director_repo = DirectorRepository::new(self.db);

        let director = match director_repo.find_character(director_index).await {
            Ok(Some(director)) if director.character_id > 0 => director,
            Ok(_) => {
                Error::from(AuthError::DirectorNotConfigured(director_index))
                    .log("No director credential at this index");

                return None;
            }
            Err(e) => {
                Error::from(e).log(&format!("Failed to load director {}", director_index));

                return None;
            }
        };

        let access_token = self
            .token_service
            .get_valid_access_token(&director_repo, director_index)
            .await?;

        Some(DirectorAccessToken {
            director_index,
            character_id: director.character_id,
            access_token,
        })
    }

    /// Returns true only if the character currently holds the Director role
    ///
    /// Failing to fetch the roles is logged and treated as not holding the role.
    pub async fn verify_director_role(&self, character_id: i64, access_token: &str) -> bool {
        match self
            .esi_gateway
            .get_character_roles(character_id, access_token)
            .await
        {
            Ok(roles) => {
                let is_director = has_director_role(&roles.roles);

                if !is_director {
                    tracing::info!(character_id, "Character does not hold the Director role");
                }

                is_director
            }
            Err(e) => {
                e.log(&format!("Failed to fetch roles of character {}", character_id));

                false
            }
        }
    }

    /// Adds the character logging in through EVE SSO to the director pool
    ///
    /// The character must hold the Director role. Its corporation is fetched from ESI if it
    /// isn't stored yet. Returns false without side effects if any step fails.
    pub async fn register_from_session(&self, eve_auth: &EveAuthentication) -> bool {
        if !self
            .verify_director_role(eve_auth.character_id, &eve_auth.token.access_token)
            .await
        {
            return false;
        }

        match self.register(eve_auth).await {
            Ok(director_index) => {
                tracing::info!(
                    director_index,
                    character_id = eve_auth.character_id,
                    "Registered director"
                );

                true
            }
            Err(e) => {
                e.log(&format!(
                    "Failed to register character {} as director",
                    eve_auth.character_id
                ));

                false
            }
        }
    }

    async fn register(&self, eve_auth: &EveAuthentication) -> Result<i32, Error> {
        let corporation_service = CorporationService::new(self.db, self.esi_client);

        let character = self
            .esi_client
            .character()
            .get_character_public_information(eve_auth.character_id)
            .await?;

        let corporation = corporation_service
            .get_or_create_corporation(character.corporation_id)
            .await?;

        let identity = DirectorIdentity {
            character_id: eve_auth.character_id,
            character_name: eve_auth.character_name.clone(),
            corporation_id: corporation.corporation_id,
            corporation_name: corporation.name,
            corporation_ticker: corporation.ticker,
        };

        self.store(identity, &eve_auth.token).await
    }

    /// Returns all director identities ordered by index
    pub async fn list(&self) -> Result<Vec<DirectorCharacterModel>, Error> {
        let directors = DirectorRepository::new(self.db).list().await?;

        Ok(directors)
    }
}
