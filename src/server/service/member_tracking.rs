//! Member roster reconciliation.
//!
//! Each pass fetches a corporation's member tracking roster with a director's token,
//! resolves member names and overwrites every tracked field of the stored member records in
//! a single commit. Failing name resolution does not stop the pass, names are stored as null
//! until the next pass.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{
        eve::{character::CharacterRepository, corporation::CorporationRepository},
        member::CorporationMemberRepository,
    },
    error::{eve::EveError, Error},
    esi::EsiGateway,
    model::esi::MemberTracking,
};

pub struct MemberTrackingService<'a> {
    db: &'a DatabaseConnection,
    esi_gateway: &'a EsiGateway,
}

impl<'a> MemberTrackingService<'a> {
    /// Creates a new instance of [`MemberTrackingService`]
    pub fn new(db: &'a DatabaseConnection, esi_gateway: &'a EsiGateway) -> Self {
        Self { db, esi_gateway }
    }

    /// Reconciles the stored members of a corporation with its current roster
    ///
    /// # Arguments
    /// - `corporation_id`: EVE corporation ID, the corporation must be stored locally
    /// - `access_token`: Token of a director of the corporation
    ///
    /// # Returns
    /// True if the roster was fetched and all members were committed. If the roster cannot be
    /// fetched no member record is touched.
    pub async fn reconcile(&self, corporation_id: i64, access_token: &str) -> bool {
        match self.try_reconcile(corporation_id, access_token).await {
            Ok(member_count) => {
                tracing::info!(corporation_id, member_count, "Updated member tracking");

                true
            }
            Err(e) => {
                e.log(&format!(
                    "Failed to update member tracking of corporation {}",
                    corporation_id
                ));

                false
            }
        }
    }

    async fn try_reconcile(&self, corporation_id: i64, access_token: &str) -> Result<usize, Error> {
        let corporation = CorporationRepository::new(self.db)
            .find_by_eve_id(corporation_id)
            .await?
            .ok_or(EveError::CorporationNotFound(corporation_id))?;

        let roster = self
            .esi_gateway
            .get_member_tracking(corporation_id, access_token)
            .await?;

        let character_ids: Vec<i64> = roster
            .iter()
            .map(|member| member.character_id)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let names = self.resolve_names(corporation_id, &character_ids).await;

        // ESI may list a character more than once, the last entry wins
        let members: BTreeMap<i64, MemberTracking> = roster
            .into_iter()
            .map(|member| (member.character_id, member))
            .collect();
        let member_count = members.len();

        let txn = self.db.begin().await?;

        let character_record_ids: HashMap<i64, i32> = CharacterRepository::new(&txn)
            .get_record_ids_by_character_ids(&character_ids)
            .await?
            .into_iter()
            .map(|(record_id, character_id)| (character_id, record_id))
            .collect();

        let members = members
            .into_values()
            .map(|member| {
                let name = names.get(&member.character_id).cloned();
                let record_id = character_record_ids.get(&member.character_id).copied();

                (member, name, record_id)
            })
            .collect();

        CorporationMemberRepository::new(&txn)
            .upsert_many(corporation.id, members)
            .await?;

        txn.commit().await?;

        Ok(member_count)
    }

    /// Resolves character names, returning an empty map if resolution fails
    async fn resolve_names(&self, corporation_id: i64, character_ids: &[i64]) -> HashMap<i64, String> {
        if character_ids.is_empty() {
            return HashMap::new();
        }

        match self.esi_gateway.resolve_names(character_ids).await {
            Ok(names) => names.into_iter().map(|name| (name.id, name.name)).collect(),
            Err(e) => {
                e.log(&format!(
                    "Failed to resolve member names of corporation {}, storing members without names",
                    corporation_id
                ));

                HashMap::new()
            }
        }
    }
}
