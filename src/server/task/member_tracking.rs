//! Member tracking batch over the director pool.
//!
//! Every director is processed in index order and reported individually. A failing director
//! never stops the remaining ones; only failing to list the directors aborts the batch.
//! Each corporation is updated at most once per batch, further directors of an already
//! updated corporation are skipped.

use std::{collections::HashSet, fmt};

use crate::server::{
    error::Error,
    model::app::AppState,
    service::{director::DirectorService, member_tracking::MemberTrackingService},
};

/// Outcome of the batch for a single director.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectorStatus {
    /// Member tracking of the director's corporation was updated.
    Ok,
    /// Director has no usable token.
    NoToken,
    /// Director no longer holds the Director role.
    MissingRole,
    /// Roster fetch or commit failed.
    Failed,
    /// Another director already updated this corporation during the batch.
    Skipped,
}

impl fmt::Display for DirectorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ok => write!(f, "OK"),
            Self::NoToken => write!(f, "NOK (no token)"),
            Self::MissingRole => write!(f, "NOK (missing Director role)"),
            Self::Failed => write!(f, "NOK"),
            Self::Skipped => write!(f, "skipped (corporation already updated)"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectorOutcome {
    pub director_index: i32,
    pub corporation_id: i64,
    pub status: DirectorStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberTrackingReport {
    pub outcomes: Vec<DirectorOutcome>,
}

impl MemberTrackingReport {
    /// Number of corporations updated
    pub fn succeeded(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| outcome.status == DirectorStatus::Ok)
            .count()
    }

    /// Number of directors which failed
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|outcome| {
                !matches!(outcome.status, DirectorStatus::Ok | DirectorStatus::Skipped)
            })
            .count()
    }
}

impl fmt::Display for MemberTrackingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} corporation(s) updated, {} director(s) failed",
            self.succeeded(),
            self.failed()
        )
    }
}

/// Updates member tracking of every director's corporation
pub async fn update_member_tracking(state: &AppState) -> Result<MemberTrackingReport, Error> {
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let directors = director_service.list().await?;

    let mut report = MemberTrackingReport::default();
    let mut updated_corporations = HashSet::new();

    for director in directors {
        let status = if updated_corporations.contains(&director.corporation_id) {
            DirectorStatus::Skipped
        } else {
            match director_service
                .refresh_by_index(director.director_index)
                .await
            {
                None => DirectorStatus::NoToken,
                Some(token) => {
                    if !director_service
                        .verify_director_role(token.character_id, &token.access_token)
                        .await
                    {
                        DirectorStatus::MissingRole
                    } else if member_tracking_service
                        .reconcile(director.corporation_id, &token.access_token)
                        .await
                    {
                        updated_corporations.insert(director.corporation_id);
                        DirectorStatus::Ok
                    } else {
                        DirectorStatus::Failed
                    }
                }
            }
        };

        tracing::info!(
            corporation_id = director.corporation_id,
            "Director {}: {}",
            director.director_index,
            status
        );

        report.outcomes.push(DirectorOutcome {
            director_index: director.director_index,
            corporation_id: director.corporation_id,
            status,
        });
    }

    Ok(report)
}
