use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{eve::character::CharacterRepository, token::CharacterTokenRepository},
    error::Error,
    model::{auth::EveAuthentication, db::EveCharacterModel},
    service::{eve::corporation::CorporationService, token::TokenService},
};

pub struct CharacterService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
    token_service: &'a TokenService,
}

impl<'a> CharacterService<'a> {
    /// Creates a new instance of [`CharacterService`]
    pub fn new(
        db: &'a DatabaseConnection,
        esi_client: &'a eve_esi::Client,
        token_service: &'a TokenService,
    ) -> Self {
        Self {
            db,
            esi_client,
            token_service,
        }
    }

    /// Stores a character logging in through EVE SSO along with its token pair
    ///
    /// The character's corporation is fetched from ESI if it isn't stored yet. Character and
    /// token are committed together.
    pub async fn store_token(
        &self,
        eve_auth: &EveAuthentication,
    ) -> Result<EveCharacterModel, Error> {
        let corporation_service = CorporationService::new(self.db, self.esi_client);

        let character = self
            .esi_client
            .character()
            .get_character_public_information(eve_auth.character_id)
            .await?;

        let corporation = corporation_service
            .get_or_create_corporation(character.corporation_id)
            .await?;

        let txn = self.db.begin().await?;

        let character = CharacterRepository::new(&txn)
            .upsert(
                eve_auth.character_id,
                eve_auth.character_name.clone(),
                corporation.id,
            )
            .await?;
        CharacterTokenRepository::new(&txn)
            .upsert(character.id, &eve_auth.token)
            .await?;

        txn.commit().await?;

        Ok(character)
    }

    /// Returns a valid access token for a character, refreshing and saving it if needed
    pub async fn get_valid_access_token(&self, character_id: i64) -> Option<String> {
        let token_repo = CharacterTokenRepository::new(self.db);

        self.token_service
            .get_valid_access_token(&token_repo, character_id)
            .await
    }
}
