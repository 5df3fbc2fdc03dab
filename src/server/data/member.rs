use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::model::esi::MemberTracking;

/// Member tracking entry to upsert along with its resolved name and local character record ID.
pub type MemberUpsert = (MemberTracking, Option<String>, Option<i32>);

pub struct CorporationMemberRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationMemberRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts members or overwrites every tracked field of members that already exist
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation in the eve_corporation table
    /// - `members`: Entries keyed by EVE character ID, each ID must appear only once
    ///
    /// # Notes
    /// - If you need transactional behavior, pass a transaction as the connection
    pub async fn upsert_many(
        &self,
        corporation_id: i32,
        members: Vec<MemberUpsert>,
    ) -> Result<(), DbErr> {
        const BATCH_SIZE: usize = 500;

        let members: Vec<entity::corporation_member::ActiveModel> = members
            .into_iter()
            .map(|(member, name, eve_character_id)| {
                entity::corporation_member::ActiveModel {
                    character_id: ActiveValue::Set(member.character_id),
                    corporation_id: ActiveValue::Set(corporation_id),
                    eve_character_id: ActiveValue::Set(eve_character_id),
                    name: ActiveValue::Set(name),
                    location_id: ActiveValue::Set(member.location_id),
                    ship_type_id: ActiveValue::Set(member.ship_type_id),
                    logon_at: ActiveValue::Set(member.logon_date.map(|date| date.naive_utc())),
                    logoff_at: ActiveValue::Set(member.logoff_date.map(|date| date.naive_utc())),
                    start_at: ActiveValue::Set(member.start_date.map(|date| date.naive_utc())),
                }
            })
            .collect();

        for batch in members.chunks(BATCH_SIZE) {
            entity::prelude::CorporationMember::insert_many(batch.to_vec())
                .on_conflict(
                    OnConflict::column(entity::corporation_member::Column::CharacterId)
                        .update_columns([
                            entity::corporation_member::Column::CorporationId,
                            entity::corporation_member::Column::EveCharacterId,
                            entity::corporation_member::Column::Name,
                            entity::corporation_member::Column::LocationId,
                            entity::corporation_member::Column::ShipTypeId,
                            entity::corporation_member::Column::LogonAt,
                            entity::corporation_member::Column::LogoffAt,
                            entity::corporation_member::Column::StartAt,
                        ])
                        .to_owned(),
                )
                .exec_without_returning(self.db)
                .await?;
        }

        Ok(())
    }

    /// Returns the members of a corporation ordered by character ID
    ///
    /// # Arguments
    /// - `corporation_id`: Record ID of the corporation in the eve_corporation table
    pub async fn find_by_corporation(
        &self,
        corporation_id: i32,
    ) -> Result<Vec<entity::corporation_member::Model>, DbErr> {
        entity::prelude::CorporationMember::find()
            .filter(entity::corporation_member::Column::CorporationId.eq(corporation_id))
            .order_by_asc(entity::corporation_member::Column::CharacterId)
            .all(self.db)
            .await
    }
}
