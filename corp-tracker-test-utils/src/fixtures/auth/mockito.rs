//! EVE SSO HTTP mock endpoint creation utilities.

use mockito::Mock;
use serde_json::Value;

use crate::{
    constant::TEST_TOKEN_PATH,
    fixtures::auth::{factory, AuthFixtures},
};

impl<'a> AuthFixtures<'a> {
    /// Create a mock token endpoint returning a successful refresh token grant.
    ///
    /// # Arguments
    /// - `response` - Token response, see [`factory::mock_token_response`]
    /// - `expected_requests` - Number of times this endpoint should be called
    pub fn create_token_endpoint(&mut self, response: Value, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(response.to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock token endpoint rejecting the grant with an OAuth2 error code.
    ///
    /// # Arguments
    /// - `status` - HTTP status of the response, EVE SSO uses 400 for rejected grants
    /// - `error` - OAuth2 error code, e.g. `invalid_grant`
    pub fn create_token_error_endpoint(
        &mut self,
        status: usize,
        error: &str,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", TEST_TOKEN_PATH)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(factory::mock_token_error(error).to_string())
            .expect(expected_requests)
            .create()
    }
}
