use corp_tracker::server::task::member_tracking::{update_member_tracking, DirectorStatus};
use corp_tracker_test_utils::prelude::*;

use crate::util::to_app_state;

/// Expect an empty report when no director is configured
#[tokio::test]
async fn empty_pool_reports_nothing() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracking_tables().build().await?;
    let state = to_app_state(&test);

    let result = update_member_tracking(&state).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(result.unwrap().outcomes.is_empty());

    Ok(())
}

/// Expect a corporation to be updated once even when it has several directors
#[tokio::test]
async fn updates_each_corporation_once() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::live("first")))
        .with_mock_director(2, 2114794366, 98000001, Some(MockToken::live("second")))
        .with_character_roles_endpoint(2114794365, vec!["Director"], 1)
        .with_character_roles_endpoint(2114794366, vec!["Director"], 0)
        .with_member_tracking_endpoint(
            98000001,
            vec![factory::mock_member_tracking(1012, 60003760, 670)],
            1,
        )
        .with_universe_names_endpoint(vec![factory::mock_universe_name(1012, "Bob")], 1)
        .build()
        .await?;
    let state = to_app_state(&test);

    let result = update_member_tracking(&state).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    let statuses: Vec<DirectorStatus> =
        report.outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(statuses, vec![DirectorStatus::Ok, DirectorStatus::Skipped]);
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 0);
    test.assert_mocks();

    Ok(())
}

/// Expect a failing director to be reported without stopping the remaining ones
#[tokio::test]
async fn failing_directors_do_not_stop_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_mock_corporation(98000002)
        .with_mock_corporation(98000003)
        .with_mock_director(1, 2114794365, 98000001, None)
        .with_mock_director(2, 2114794366, 98000002, Some(MockToken::live("no_role")))
        .with_mock_director(3, 2114794367, 98000003, Some(MockToken::live("director")))
        .with_character_roles_endpoint(2114794366, vec!["Accountant"], 1)
        .with_character_roles_endpoint(2114794367, vec!["Director"], 1)
        .with_member_tracking_endpoint(98000002, Vec::new(), 0)
        .with_member_tracking_endpoint(
            98000003,
            vec![factory::mock_member_tracking(1012, 60003760, 670)],
            1,
        )
        .with_universe_names_endpoint(vec![factory::mock_universe_name(1012, "Bob")], 1)
        .build()
        .await?;
    let state = to_app_state(&test);

    let result = update_member_tracking(&state).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    let statuses: Vec<DirectorStatus> =
        report.outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(
        statuses,
        vec![
            DirectorStatus::NoToken,
            DirectorStatus::MissingRole,
            DirectorStatus::Ok
        ]
    );
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect a failed roster fetch to be reported and allow another director to retry it
#[tokio::test]
async fn failed_corporation_is_retried_by_next_director() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::live("first")))
        .with_mock_director(2, 2114794366, 98000001, Some(MockToken::live("second")))
        .with_character_roles_endpoint(2114794365, vec!["Director"], 1)
        .with_character_roles_endpoint(2114794366, vec!["Director"], 1)
        .with_member_tracking_error_endpoint(98000001, 500, 2)
        .build()
        .await?;
    let state = to_app_state(&test);

    let result = update_member_tracking(&state).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    let statuses: Vec<DirectorStatus> =
        report.outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(statuses, vec![DirectorStatus::Failed, DirectorStatus::Failed]);
    assert_eq!(report.failed(), 2);
    test.assert_mocks();

    Ok(())
}

/// Expect a failed roles request to be reported as a missing role while later directors still run
#[tokio::test]
async fn roles_request_failure_does_not_stop_batch() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_corporation(98000001)
        .with_mock_corporation(98000002)
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::live("first")))
        .with_mock_director(2, 2114794366, 98000002, Some(MockToken::live("second")))
        .with_character_roles_error_endpoint(2114794365, 502, 1)
        .with_character_roles_endpoint(2114794366, vec!["Director"], 1)
        .with_member_tracking_endpoint(98000001, Vec::new(), 0)
        .with_member_tracking_endpoint(
            98000002,
            vec![factory::mock_member_tracking(1012, 60003760, 670)],
            1,
        )
        .with_universe_names_endpoint(vec![factory::mock_universe_name(1012, "Bob")], 1)
        .build()
        .await?;
    let state = to_app_state(&test);

    let result = update_member_tracking(&state).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let report = result.unwrap();
    let statuses: Vec<DirectorStatus> =
        report.outcomes.iter().map(|outcome| outcome.status).collect();
    assert_eq!(
        statuses,
        vec![DirectorStatus::MissingRole, DirectorStatus::Ok]
    );
    assert_eq!(report.succeeded(), 1);
    assert_eq!(report.failed(), 1);
    test.assert_mocks();

    Ok(())
}
