use corp_tracker::server::{
    data::token::{CharacterTokenRepository, TokenStore},
    model::{auth::EveAuthentication, token::TokenPair},
    service::eve::character::CharacterService,
};
use corp_tracker_test_utils::prelude::*;

use crate::util::to_app_state;

/// Expect the character, its corporation and its token to be stored
#[tokio::test]
async fn store_token_creates_character_and_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_character_endpoint(2114794365, factory::mock_character(98000001), 1)
        .with_corporation_endpoint(98000001, factory::mock_corporation(None), 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let character_service =
        CharacterService::new(&state.db, &state.esi_client, &state.token_service);
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("access", "refresh", None),
    };

    let result = character_service.store_token(&eve_auth).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let character = result.unwrap();
    assert_eq!(character.character_id, 2114794365);
    assert_eq!(character.name, "Hyziri");
    let stored = CharacterTokenRepository::new(&test.db)
        .load_token(2114794365)
        .await?;
    assert_eq!(stored, Some(eve_auth.token));
    test.assert_mocks();

    Ok(())
}

/// Expect a second login to replace the stored token pair
#[tokio::test]
async fn store_token_replaces_previous_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_character_token(2114794365, 98000001, MockToken::expired("old"))
        .with_character_endpoint(2114794365, factory::mock_character(98000001), 1)
        .with_corporation_endpoint(98000001, factory::mock_corporation(None), 0)
        .build()
        .await?;
    let state = to_app_state(&test);
    let character_service =
        CharacterService::new(&state.db, &state.esi_client, &state.token_service);
    let eve_auth = EveAuthentication {
        character_id: 2114794365,
        character_name: "Hyziri".to_string(),
        token: TokenPair::new("new", "new_refresh", None),
    };

    let result = character_service.store_token(&eve_auth).await;

    assert!(result.is_ok(), "Error: {:?}", result);
    let stored = CharacterTokenRepository::new(&test.db)
        .load_token(2114794365)
        .await?;
    assert_eq!(stored, Some(eve_auth.token));
    test.assert_mocks();

    Ok(())
}

/// Expect an expired character token to be refreshed and saved
#[tokio::test]
async fn get_valid_access_token_refreshes_expired_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_character_token(2114794365, 98000001, MockToken::expired("old"))
        .with_token_endpoint(auth_factory::mock_token_response("new", None, 1199), 1)
        .build()
        .await?;
    let state = to_app_state(&test);
    let character_service =
        CharacterService::new(&state.db, &state.esi_client, &state.token_service);

    let access_token = character_service.get_valid_access_token(2114794365).await;

    assert_eq!(access_token.as_deref(), Some("new"));
    let stored = CharacterTokenRepository::new(&test.db)
        .load_token(2114794365)
        .await?
        .unwrap();
    assert_eq!(stored.access_token, "new");
    assert_eq!(stored.refresh_token, "old_refresh");
    test.assert_mocks();

    Ok(())
}

/// Expect None for a character that never logged in
#[tokio::test]
async fn get_valid_access_token_without_token() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_tracking_tables()
        .with_mock_character(2114794365, 98000001)
        .build()
        .await?;
    let state = to_app_state(&test);
    let character_service =
        CharacterService::new(&state.db, &state.esi_client, &state.token_service);

    let access_token = character_service.get_valid_access_token(2114794365).await;

    assert!(access_token.is_none());

    Ok(())
}
