//! Token pair persistence.
//!
//! [`TokenStore`] is the seam between the token refresh protocol and the tables holding a
//! principal's token pair. Characters and directors each store their pairs in their own
//! table, keyed by their own kind of principal.

use std::{fmt::Display, future::Future};

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
    RelationTrait,
};

use crate::server::model::token::TokenPair;

/// Storage for the token pair of a principal.
pub trait TokenStore {
    /// Identifier of the principal a token pair belongs to.
    type Principal: Copy + Display + Send + Sync;

    /// Kind of principal used in log messages, e.g. `"character"`.
    const PRINCIPAL_KIND: &'static str;

    /// Loads the token pair of a principal, `None` if no pair is stored.
    fn load_token(
        &self,
        principal: Self::Principal,
    ) -> impl Future<Output = Result<Option<TokenPair>, DbErr>> + Send;

    /// Durably replaces the token pair of a principal.
    fn save_token(
        &self,
        principal: Self::Principal,
        token: &TokenPair,
    ) -> impl Future<Output = Result<(), DbErr>> + Send;
}

pub struct CharacterTokenRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterTokenRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts or replaces the token pair of a character
    ///
    /// # Arguments
    /// - `character_record_id`: Record ID of the character in the eve_character table
    pub async fn upsert(
        &self,
        character_record_id: i32,
        token: &TokenPair,
    ) -> Result<entity::eve_character_token::Model, DbErr> {
        entity::prelude::EveCharacterToken::insert(entity::eve_character_token::ActiveModel {
            character_id: ActiveValue::Set(character_record_id),
            access_token: ActiveValue::Set(token.access_token.clone()),
            refresh_token: ActiveValue::Set(token.refresh_token.clone()),
            expires_at: ActiveValue::Set(token.expires_at.map(|expires_at| expires_at.naive_utc())),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::eve_character_token::Column::CharacterId)
                .update_columns([
                    entity::eve_character_token::Column::AccessToken,
                    entity::eve_character_token::Column::RefreshToken,
                    entity::eve_character_token::Column::ExpiresAt,
                    entity::eve_character_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    /// Finds the token of a character by its EVE character ID
    pub async fn find_by_character_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character_token::Model>, DbErr> {
        entity::prelude::EveCharacterToken::find()
            .join(
                sea_orm::JoinType::InnerJoin,
                entity::eve_character_token::Relation::EveCharacter.def(),
            )
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }
}

impl<C: ConnectionTrait> TokenStore for CharacterTokenRepository<'_, C> {
    type Principal = i64;
    const PRINCIPAL_KIND: &'static str = "character";

    async fn load_token(&self, character_id: i64) -> Result<Option<TokenPair>, DbErr> {
        let token = self.find_by_character_id(character_id).await?;

        Ok(token.map(|token| {
            TokenPair::from_columns(token.access_token, token.refresh_token, token.expires_at)
        }))
    }

    async fn save_token(&self, character_id: i64, token: &TokenPair) -> Result<(), DbErr> {
        let Some(existing) = self.find_by_character_id(character_id).await? else {
            return Err(DbErr::RecordNotFound(format!(
                "token for character {}",
                character_id
            )));
        };

        self.upsert(existing.character_id, token).await?;

        Ok(())
    }
}
