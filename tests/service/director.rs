use corp_tracker::server::{
    data::director::DirectorRepository,
    model::{auth::EveAuthentication, director::DirectorIdentity, token::TokenPair},
    service::director::DirectorService,
};
use corp_tracker_test_utils::prelude::*;

use crate::util::to_app_state;

fn identity(character_id: i64) -> DirectorIdentity {
    DirectorIdentity {
        character_id,
        character_name: "Hyziri".to_string(),
        corporation_id: 98000001,
        corporation_name: "The Order of Autumn".to_string(),
        corporation_ticker: "F4LL.".to_string(),
    }
}

/// Expect the first director to be stored at index 1
#[tokio::test]
async fn store_assigns_first_index() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracking_tables().build().await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service
        .store(identity(2114794365), &TokenPair::new("access", "refresh", None))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 1);

    Ok(())
}

/// Expect a new director to be stored after the highest index rather than in a gap
#[tokio::test]
async fn store_appends_after_highest_index() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, None)
        .with_mock_director(3, 2114794366, 98000001, None)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service
        .store(identity(2114794367), &TokenPair::new("access", "refresh", None))
        .await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert_eq!(result.unwrap(), 4);

    let indices: Vec<i32> = director_service
        .list()
        .await
        .unwrap()
        .iter()
        .map(|director| director.director_index)
        .collect();
    assert_eq!(indices, vec![1, 3, 4]);

    Ok(())
}

/// Expect removal to succeed for a director that has no token record
#[tokio::test]
async fn remove_director_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, None)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.remove(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    assert!(director_service.list().await.unwrap().is_empty());

    Ok(())
}

/// Expect identity and token to both be removed
#[tokio::test]
async fn remove_director_with_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::live("access")))
        .with_mock_director(2, 2114794366, 98000001, Some(MockToken::live("other")))
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.remove(1).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let director_repo = DirectorRepository::new(&test.db);
    assert!(director_repo.find_character(1).await?.is_none());
    assert!(director_repo.find_token(1).await?.is_none());
    assert!(director_repo.find_token(2).await?.is_some());

    Ok(())
}

/// Expect removing an unused index to be a no-op
#[tokio::test]
async fn remove_unknown_index_is_ok() -> Result<(), TestError> {
    let test = TestBuilder::new().with_tracking_tables().build().await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.remove(7).await;

    assert!(result.is_ok(), "Error: {:?}", result);

    Ok(())
}

/// Expect a live token to be returned without contacting EVE SSO
#[tokio::test]
async fn refresh_by_index_returns_live_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::live("other")))
        .with_mock_director(2, 2114794366, 98000001, Some(MockToken::live("access")))
        .with_token_endpoint(auth_factory::mock_token_response("new", None, 1199), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.refresh_by_index(2).await;

    let token = result.expect("Expected a director token");
    assert_eq!(token.director_index, 2);
    assert_eq!(token.character_id, 2114794366);
    assert_eq!(token.access_token, "access");
    test.assert_mocks();

    Ok(())
}

/// Expect an expired token to be refreshed and the new pair persisted
#[tokio::test]
async fn refresh_by_index_persists_refreshed_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::expired("old")))
        .with_token_endpoint(
            auth_factory::mock_token_response("new", Some("new_refresh"), 1199),
            1,
        )
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.refresh_by_index(1).await;

    assert_eq!(
        result.map(|token| token.access_token),
        Some("new".to_string())
    );
    let stored = DirectorRepository::new(&test.db)
        .find_token(1)
        .await?
        .unwrap();
    assert_eq!(stored.access_token, "new");
    assert_eq!(stored.refresh_token, "new_refresh");
    assert!(stored.expires_at.unwrap() > chrono::Utc::now().naive_utc());
    test.assert_mocks();

    Ok(())
}

/// Expect None when EVE SSO rejects the refresh token, keeping the stored credential
#[tokio::test]
async fn refresh_by_index_rejected_refresh_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, Some(MockToken::expired("old")))
        .with_token_error_endpoint(400, "invalid_grant", 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.refresh_by_index(1).await;

    assert!(result.is_none());
    let stored = DirectorRepository::new(&test.db)
        .find_token(1)
        .await?
        .unwrap();
    assert_eq!(stored.access_token, "old");
    test.assert_mocks();

    Ok(())
}

/// Expect None for an index without a director
#[tokio::test]
async fn refresh_by_index_unconfigured_director() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_token_endpoint(auth_factory::mock_token_response("new", None, 1199), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.refresh_by_index(1).await;

    assert!(result.is_none());
    test.assert_mocks();

    Ok(())
}

/// Expect None for a director whose token record is missing
#[tokio::test]
async fn refresh_by_index_director_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_director(1, 2114794365, 98000001, None)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let result = director_service.refresh_by_index(1).await;

    assert!(result.is_none());

    Ok(())
}

/// Expect a character holding the Director role to be added to the pool
#[tokio::test]
async fn register_from_session_adds_director() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_endpoint(2114794365, vec!["Director", "Accountant"], 1)
        .with_character_endpoint(2114794365, factory::mock_character(98000001), 1)
        .with_corporation_endpoint(98000001, factory::mock_corporation(None), 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("access", "refresh", None),
    };

    let registered = director_service.register_from_session(&eve_auth).await;

    assert!(registered);
    let directors = director_service.list().await.unwrap();
    assert_eq!(directors.len(), 1);
    assert_eq!(directors[0].director_index, 1);
    assert_eq!(directors[0].character_id, 2114794365);
    assert_eq!(directors[0].corporation_id, 98000001);
    assert_eq!(directors[0].corporation_ticker, "F4LL.");
    test.assert_mocks();

    Ok(())
}

/// Expect a character without the Director role to be refused before any other request
#[tokio::test]
async fn register_from_session_requires_director_role() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_endpoint(2114794365, vec!["Accountant"], 1)
        .with_character_endpoint(2114794365, factory::mock_character(98000001), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("access", "refresh", None),
    };

    let registered = director_service.register_from_session(&eve_auth).await;

    assert!(!registered);
    assert!(director_service.list().await.unwrap().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect registration to fail without side effects when the corporation cannot be fetched
#[tokio::test]
async fn register_from_session_corporation_lookup_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_endpoint(2114794365, vec!["Director"], 1)
        .with_character_endpoint(2114794365, factory::mock_character(98000001), 1)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/corporations/98000001")
                .with_status(503)
                .expect_at_least(1)
                .create()
        })
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("access", "refresh", None),
    };

    let registered = director_service.register_from_session(&eve_auth).await;

    assert!(!registered);
    assert!(director_service.list().await.unwrap().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect registration to fail without side effects when the character cannot be fetched
#[tokio::test]
async fn register_from_session_character_lookup_failure() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_endpoint(2114794365, vec!["Director"], 1)
        .with_mock_endpoint(|server| {
            server
                .mock("GET", "/characters/2114794365")
                .with_status(503)
                .expect_at_least(1)
                .create()
        })
        .with_corporation_endpoint(98000001, factory::mock_corporation(None), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("access", "refresh", None),
    };

    let registered = director_service.register_from_session(&eve_auth).await;

    assert!(!registered);
    assert!(director_service.list().await.unwrap().is_empty());
    test.assert_mocks();

    Ok(())
}

/// Expect a failed roles request to count as not holding the Director role
#[tokio::test]
async fn verify_director_role_false_on_server_error() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_error_endpoint(2114794365, 502, 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let is_director = director_service
        .verify_director_role(2114794365, "access")
        .await;

    assert!(!is_director);
    test.assert_mocks();

    Ok(())
}

/// Expect the Director role to be recognised among other roles
#[tokio::test]
async fn verify_director_role_true_for_director() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_roles_endpoint(2114794365, vec!["Accountant", "Director"], 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let director_service = DirectorService::new(
        &state.db,
        &state.esi_client,
        &state.esi_gateway,
        &state.token_service,
    );

    let is_director = director_service
        .verify_director_role(2114794365, "access")
        .await;

    assert!(is_director);
    test.assert_mocks();

    Ok(())
}
