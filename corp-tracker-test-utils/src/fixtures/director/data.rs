//! Director credential and corporation member insertion utilities.

use chrono::Utc;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{
    error::TestError,
    fixtures::{director::DirectorFixtures, eve::factory},
    model::{CorporationMemberModel, DirectorCharacterModel, MockToken},
};

impl<'a> DirectorFixtures<'a> {
    /// Insert a director identity and, if provided, its token pair.
    ///
    /// # Arguments
    /// - `director_index` - Index of the director in the pool
    /// - `character_id` - EVE character ID of the director
    /// - `corporation_id` - EVE corporation ID of the director
    /// - `token` - Token pair to store, `None` to leave the director without a token record
    pub async fn insert_mock_director(
        &self,
        director_index: i32,
        character_id: i64,
        corporation_id: i64,
        token: Option<&MockToken>,
    ) -> Result<DirectorCharacterModel, TestError> {
        let corporation = factory::mock_corporation(None);
        let character = factory::mock_character(corporation_id);

        let director = entity::prelude::DirectorCharacter::insert(
            entity::director_character::ActiveModel {
                director_index: ActiveValue::Set(director_index),
                character_id: ActiveValue::Set(character_id),
                character_name: ActiveValue::Set(character.name),
                corporation_id: ActiveValue::Set(corporation_id),
                corporation_name: ActiveValue::Set(corporation.name),
                corporation_ticker: ActiveValue::Set(corporation.ticker),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?;

        if let Some(token) = token {
            entity::prelude::DirectorToken::insert(entity::director_token::ActiveModel {
                director_index: ActiveValue::Set(director_index),
                access_token: ActiveValue::Set(token.access_token.clone()),
                refresh_token: ActiveValue::Set(token.refresh_token.clone()),
                expires_at: ActiveValue::Set(token.expires_at.map(|date| date.naive_utc())),
                updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            })
            .exec_without_returning(&self.setup.db)
            .await?;
        }

        Ok(director)
    }

    /// Insert a corporation member record, creating the corporation if needed.
    ///
    /// # Arguments
    /// - `corporation_id` - EVE corporation ID the member belongs to
    /// - `character_id` - EVE character ID of the member
    /// - `name` - Resolved name of the member
    pub async fn insert_mock_member(
        &mut self,
        corporation_id: i64,
        character_id: i64,
        name: Option<&str>,
    ) -> Result<CorporationMemberModel, TestError> {
        let corporation = self
            .setup
            .eve()
            .insert_mock_corporation(corporation_id)
            .await?;

        Ok(entity::prelude::CorporationMember::insert(
            entity::corporation_member::ActiveModel {
                character_id: ActiveValue::Set(character_id),
                corporation_id: ActiveValue::Set(corporation.id),
                eve_character_id: ActiveValue::Set(None),
                name: ActiveValue::Set(name.map(str::to_string)),
                location_id: ActiveValue::Set(Some(30000142)),
                ship_type_id: ActiveValue::Set(Some(587)),
                logon_at: ActiveValue::Set(None),
                logoff_at: ActiveValue::Set(None),
                start_at: ActiveValue::Set(None),
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }
}
