use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::{
    data::token::TokenStore,
    model::{director::DirectorIdentity, token::TokenPair},
};

pub struct DirectorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DirectorRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Returns the highest director index in use, `None` if there are no directors
    pub async fn max_index(&self) -> Result<Option<i32>, DbErr> {
        let max_index = entity::prelude::DirectorCharacter::find()
            .select_only()
            .column_as(
                entity::director_character::Column::DirectorIndex.max(),
                "max_index",
            )
            .into_tuple::<Option<i32>>()
            .one(self.db)
            .await?;

        Ok(max_index.flatten())
    }

    /// Inserts a director identity and its token pair under the provided index
    ///
    /// # Notes
    /// - Pass a transaction as the connection so identity & token are committed together
    pub async fn create(
        &self,
        director_index: i32,
        identity: DirectorIdentity,
        token: &TokenPair,
    ) -> Result<entity::director_character::Model, DbErr> {
        let now = Utc::now().naive_utc();

        let director = entity::prelude::DirectorCharacter::insert(
            entity::director_character::ActiveModel {
                director_index: ActiveValue::Set(director_index),
                character_id: ActiveValue::Set(identity.character_id),
                character_name: ActiveValue::Set(identity.character_name),
                corporation_id: ActiveValue::Set(identity.corporation_id),
                corporation_name: ActiveValue::Set(identity.corporation_name),
                corporation_ticker: ActiveValue::Set(identity.corporation_ticker),
                created_at: ActiveValue::Set(now),
            },
        )
        .exec_with_returning(self.db)
        .await?;

        self.upsert_token(director_index, token).await?;

        Ok(director)
    }

    pub async fn find_character(
        &self,
        director_index: i32,
    ) -> Result<Option<entity::director_character::Model>, DbErr> {
        entity::prelude::DirectorCharacter::find_by_id(director_index)
            .one(self.db)
            .await
    }

    pub async fn find_token(
        &self,
        director_index: i32,
    ) -> Result<Option<entity::director_token::Model>, DbErr> {
        entity::prelude::DirectorToken::find_by_id(director_index)
            .one(self.db)
            .await
    }

    /// Inserts or replaces the token pair of a director
    ///
    /// The director identity must already exist due to the foreign key constraint.
    pub async fn upsert_token(&self, director_index: i32, token: &TokenPair) -> Result<(), DbErr> {
        entity::prelude::DirectorToken::insert(entity::director_token::ActiveModel {
            director_index: ActiveValue::Set(director_index),
            access_token: ActiveValue::Set(token.access_token.clone()),
            refresh_token: ActiveValue::Set(token.refresh_token.clone()),
            expires_at: ActiveValue::Set(token.expires_at.map(|expires_at| expires_at.naive_utc())),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
        })
        .on_conflict(
            OnConflict::column(entity::director_token::Column::DirectorIndex)
                .update_columns([
                    entity::director_token::Column::AccessToken,
                    entity::director_token::Column::RefreshToken,
                    entity::director_token::Column::ExpiresAt,
                    entity::director_token::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_without_returning(self.db)
        .await?;

        Ok(())
    }

    /// Deletes the token of a director, returning the number of rows deleted
    pub async fn delete_token(&self, director_index: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DirectorToken::delete_many()
            .filter(entity::director_token::Column::DirectorIndex.eq(director_index))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes the identity of a director, returning the number of rows deleted
    pub async fn delete_character(&self, director_index: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::DirectorCharacter::delete_many()
            .filter(entity::director_character::Column::DirectorIndex.eq(director_index))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }

    /// Returns all director identities ordered by index
    pub async fn list(&self) -> Result<Vec<entity::director_character::Model>, DbErr> {
        entity::prelude::DirectorCharacter::find()
            .order_by_asc(entity::director_character::Column::DirectorIndex)
            .all(self.db)
            .await
    }
}

impl<C: ConnectionTrait> TokenStore for DirectorRepository<'_, C> {
    type Principal = i32;
    const PRINCIPAL_KIND: &'static str = "director";

    async fn load_token(&self, director_index: i32) -> Result<Option<TokenPair>, DbErr> {
        let token = self.find_token(director_index).await?;

        Ok(token.map(|token| {
            TokenPair::from_columns(token.access_token, token.refresh_token, token.expires_at)
        }))
    }

    async fn save_token(&self, director_index: i32, token: &TokenPair) -> Result<(), DbErr> {
        self.upsert_token(director_index, token).await
    }
}
