use chrono::Utc;
use eve_esi::model::corporation::Corporation;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

pub struct CorporationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> CorporationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        corporation_id: i64,
        corporation: Corporation,
    ) -> Result<entity::eve_corporation::Model, DbErr> {
        let now = Utc::now().naive_utc();

        entity::prelude::EveCorporation::insert(entity::eve_corporation::ActiveModel {
            corporation_id: ActiveValue::Set(corporation_id),
            alliance_id: ActiveValue::Set(corporation.alliance_id),
            name: ActiveValue::Set(corporation.name),
            ticker: ActiveValue::Set(corporation.ticker),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await
    }

    pub async fn find_by_eve_id(
        &self,
        corporation_id: i64,
    ) -> Result<Option<entity::eve_corporation::Model>, DbErr> {
        entity::prelude::EveCorporation::find()
            .filter(entity::eve_corporation::Column::CorporationId.eq(corporation_id))
            .one(self.db)
            .await
    }
}
