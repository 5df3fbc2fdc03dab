use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QuerySelect,
};

pub struct CharacterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CharacterRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a character or updates its name & corporation if it already exists
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the character's corporation in the eve_corporation table
    pub async fn upsert(
        &self,
        character_id: i64,
        name: String,
        corporation_id: i32,
    ) -> Result<entity::eve_character::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::EveCharacter::insert(entity::eve_character::ActiveModel {
            character_id: ActiveValue::Set(character_id),
            corporation_id: ActiveValue::Set(corporation_id),
            name: ActiveValue::Set(name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::eve_character::Column::CharacterId)
                .update_columns([
                    entity::eve_character::Column::CorporationId,
                    entity::eve_character::Column::Name,
                    entity::eve_character::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_eve_id(
        &self,
        character_id: i64,
    ) -> Result<Option<entity::eve_character::Model>, DbErr> {
        entity::prelude::EveCharacter::find()
            .filter(entity::eve_character::Column::CharacterId.eq(character_id))
            .one(self.db)
            .await
    }

    /// Returns `(record_id, character_id)` for each of the provided character IDs known locally
    ///
    /// Character IDs without a record are omitted from the result.
    pub async fn get_record_ids_by_character_ids(
        &self,
        character_ids: &[i64],
    ) -> Result<Vec<(i32, i64)>, DbErr> {
        const BATCH_SIZE: usize = 1000;

        let mut record_ids = Vec::new();

        for batch in character_ids.chunks(BATCH_SIZE) {
            let found = entity::prelude::EveCharacter::find()
                .select_only()
                .column(entity::eve_character::Column::Id)
                .column(entity::eve_character::Column::CharacterId)
                .filter(entity::eve_character::Column::CharacterId.is_in(batch.iter().copied()))
                .into_tuple::<(i32, i64)>()
                .all(self.db)
                .await?;

            record_ids.extend(found);
        }

        Ok(record_ids)
    }
}
