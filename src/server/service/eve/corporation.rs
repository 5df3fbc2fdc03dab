use sea_orm::DatabaseConnection;

use crate::server::{
    data::eve::corporation::CorporationRepository, error::Error, model::db::EveCorporationModel,
};

pub struct CorporationService<'a> {
    db: &'a DatabaseConnection,
    esi_client: &'a eve_esi::Client,
}

impl<'a> CorporationService<'a> {
    /// Creates a new instance of [`CorporationService`]
    pub fn new(db: &'a DatabaseConnection, esi_client: &'a eve_esi::Client) -> Self {
        Self { db, esi_client }
    }

    /// Fetches a corporation from EVE Online's ESI and creates a database entry
    pub async fn create_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<EveCorporationModel, Error> {
        let corporation_repo = CorporationRepository::new(self.db);

        let corporation = self
            .esi_client
            .corporation()
            .get_corporation_information(corporation_id)
            .await?;

        let corporation = corporation_repo.create(corporation_id, corporation).await?;

        Ok(corporation)
    }

    /// Get corporation from database or create an entry for it from ESI
    pub async fn get_or_create_corporation(
        &self,
        corporation_id: i64,
    ) -> Result<EveCorporationModel, Error> {
        let corporation_repo = CorporationRepository::new(self.db);

        if let Some(corporation) = corporation_repo.find_by_eve_id(corporation_id).await? {
            return Ok(corporation);
        }

        self.create_corporation(corporation_id).await
    }
}
