//! EVE entity database insertion utilities.
//!
//! Parent records are created automatically when missing so fixtures can be declared in any
//! order.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    error::TestError,
    fixtures::eve::{factory, EveFixtures},
    model::{EveCharacterModel, EveCharacterTokenModel, EveCorporationModel, MockToken},
};

impl<'a> EveFixtures<'a> {
    /// Insert a mock corporation into the database.
    ///
    /// Returns the existing record if the corporation was already inserted.
    ///
    /// # Returns
    /// - `Ok(EveCorporationModel)` - The created or existing corporation record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<EveCorporationModel, TestError> {
        if let Some(existing_corporation) = entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(&self.setup.db)
            .await?
        {
            return Ok(existing_corporation);
        }

        let corporation = factory::mock_corporation(None);

        Ok(
            entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
                corporation_id: ActiveValue::Set(corporation_id),
                alliance_id: ActiveValue::Set(corporation.alliance_id),
                name: ActiveValue::Set(corporation.name),
                ticker: ActiveValue::Set(corporation.ticker),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a mock character into the database, creating its corporation if needed.
    ///
    /// # Returns
    /// - `Ok(EveCharacterModel)` - The created character record
    /// - `Err(TestError::DbErr)` - Database query or insert operation failed
    pub async fn insert_mock_character(
        &self,
        character_id: i64,
        corporation_id: i64,
    ) -> Result<EveCharacterModel, TestError> {
        let corporation_model = self.insert_mock_corporation(corporation_id).await?;
        let character = factory::mock_character(corporation_id);

        Ok(
            entity::prelude::EveCharacter::insert(entity::eve_character::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                corporation_id: ActiveValue::Set(corporation_model.id),
                name: ActiveValue::Set(character.name),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Insert a token pair for an existing character.
    ///
    /// # Arguments
    /// - `character` - Character record the token belongs to
    /// - `token` - Token pair to store
    pub async fn insert_mock_character_token(
        &self,
        character: &EveCharacterModel,
        token: &MockToken,
    ) -> Result<EveCharacterTokenModel, TestError> {
        Ok(entity::prelude::EveCharacterToken::insert(
            entity::eve_character_token::ActiveModel {
                character_id: ActiveValue::Set(character.id),
                access_token: ActiveValue::Set(token.access_token.clone()),
                refresh_token: ActiveValue::Set(token.refresh_token.clone()),
                expires_at: ActiveValue::Set(token.expires_at.map(|date| date.naive_utc())),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
