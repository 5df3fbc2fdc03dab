use corp_tracker::server::{
    data::{eve::corporation::CorporationRepository, member::CorporationMemberRepository},
    service::member_tracking::MemberTrackingService,
};
use corp_tracker_test_utils::prelude::*;
use sea_orm::DatabaseConnection;

use crate::util::to_app_state;

async fn stored_members(
    db: &DatabaseConnection,
    corporation_id: i64,
) -> Result<Vec<entity::corporation_member::Model>, TestError> {
    let corporation = CorporationRepository::new(db)
        .find_by_eve_id(corporation_id)
        .await?
        .unwrap();

    Ok(CorporationMemberRepository::new(db)
        .find_by_corporation(corporation.id)
        .await?)
}

/// Expect a roster member to be stored with its name, location, ship and character link
#[tokio::test]
async fn reconcile_stores_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_character(1012, 98000001)
        .with_member_tracking_endpoint(
            98000001,
            vec![factory::mock_member_tracking(1012, 60003760, 670)],
            1,
        )
        .with_universe_names_endpoint(vec![factory::mock_universe_name(1012, "Bob")], 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(updated);
    let members = stored_members(&test.db, 98000001).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].character_id, 1012);
    assert_eq!(members[0].name.as_deref(), Some("Bob"));
    assert_eq!(members[0].location_id, Some(60003760));
    assert_eq!(members[0].ship_type_id, Some(670));
    assert!(members[0].eve_character_id.is_some());
    assert!(members[0].logon_at.is_some());
    test.assert_mocks();

    Ok(())
}

/// Expect members to be stored without names when name resolution fails
#[tokio::test]
async fn reconcile_without_names_when_resolution_fails() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_member_tracking_endpoint(
            98000001,
            vec![
                factory::mock_member_tracking(1012, 60003760, 670),
                factory::mock_member_tracking(1013, 60003760, 587),
            ],
            1,
        )
        .with_universe_names_error_endpoint(500, 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(updated);
    let members = stored_members(&test.db, 98000001).await?;
    assert_eq!(members.len(), 2);
    assert!(members.iter().all(|member| member.name.is_none()));
    assert!(members.iter().all(|member| member.eve_character_id.is_none()));
    test.assert_mocks();

    Ok(())
}

/// Expect stored members to be left untouched when the roster cannot be fetched
#[tokio::test]
async fn reconcile_roster_failure_leaves_members_unchanged() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_member(98000001, 1012, Some("Alice"))
        .with_member_tracking_error_endpoint(98000001, 500, 1)
        .with_universe_names_endpoint(Vec::new(), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(!updated);
    let members = stored_members(&test.db, 98000001).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].name.as_deref(), Some("Alice"));
    assert_eq!(members[0].ship_type_id, Some(587));
    test.assert_mocks();

    Ok(())
}

/// Expect a missing Director role on ESI's side to fail the reconcile
#[tokio::test]
async fn reconcile_forbidden_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_member_tracking_error_endpoint(98000001, 403, 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(!updated);
    test.assert_mocks();

    Ok(())
}

/// Expect reconciling the same roster twice to leave the same records
#[tokio::test]
async fn reconcile_is_idempotent() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_member_tracking_endpoint(
            98000001,
            vec![
                factory::mock_member_tracking(1012, 60003760, 670),
                factory::mock_member_tracking(1013, 30000142, 587),
            ],
            2,
        )
        .with_universe_names_endpoint(
            vec![
                factory::mock_universe_name(1012, "Bob"),
                factory::mock_universe_name(1013, "Carol"),
            ],
            2,
        )
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    assert!(member_tracking_service.reconcile(98000001, "access").await);
    let first = stored_members(&test.db, 98000001).await?;
    assert!(member_tracking_service.reconcile(98000001, "access").await);
    let second = stored_members(&test.db, 98000001).await?;

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    test.assert_mocks();

    Ok(())
}

/// Expect the last entry of a character listed twice to be stored
#[tokio::test]
async fn reconcile_duplicate_entries_last_wins() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_member_tracking_endpoint(
            98000001,
            vec![
                factory::mock_member_tracking(1012, 60003760, 670),
                factory::mock_member_tracking(1012, 30000142, 587),
            ],
            1,
        )
        .with_universe_names_endpoint(vec![factory::mock_universe_name(1012, "Bob")], 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(updated);
    let members = stored_members(&test.db, 98000001).await?;
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].location_id, Some(30000142));
    assert_eq!(members[0].ship_type_id, Some(587));

    Ok(())
}

/// Expect an empty roster to succeed without resolving names
#[tokio::test]
async fn reconcile_empty_roster() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_member_tracking_endpoint(98000001, Vec::new(), 1)
        .with_universe_names_endpoint(Vec::new(), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(updated);
    assert!(stored_members(&test.db, 98000001).await?.is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a corporation unknown locally to fail before the roster is requested
#[tokio::test]
async fn reconcile_unknown_corporation() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_member_tracking_endpoint(98000001, Vec::new(), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let member_tracking_service = MemberTrackingService::new(&state.db, &state.esi_gateway);

    let updated = member_tracking_service.reconcile(98000001, "access").await;

    assert!(!updated);
    test.assert_mocks();

    Ok(())
}
