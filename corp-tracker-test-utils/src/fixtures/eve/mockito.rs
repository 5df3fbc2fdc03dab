//! ESI HTTP mock endpoint creation utilities.
//!
//! Every endpoint verifies it was called exactly `expected_requests` times when the test
//! asserts its mocks.

use eve_esi::model::{character::Character, corporation::Corporation};
use mockito::Mock;
use serde_json::{json, Value};

use crate::fixtures::eve::EveFixtures;

impl<'a> EveFixtures<'a> {
    /// Create a mock endpoint at `/corporations/{corporation_id}` returning public corporation info.
    pub fn create_corporation_endpoint(
        &mut self,
        corporation_id: i64,
        mock_corporation: Corporation,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_corporation).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/characters/{character_id}` returning public character info.
    pub fn create_character_endpoint(
        &mut self,
        character_id: i64,
        mock_character: Character,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}", character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::to_string(&mock_character).unwrap())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/corporations/{corporation_id}/membertracking`.
    ///
    /// # Arguments
    /// - `entries` - Roster entries, see [`factory::mock_member_tracking`](crate::fixtures::eve::factory::mock_member_tracking)
    pub fn create_member_tracking_endpoint(
        &mut self,
        corporation_id: i64,
        entries: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}/membertracking", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(entries).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/corporations/{corporation_id}/membertracking` failing with `status`.
    pub fn create_member_tracking_error_endpoint(
        &mut self,
        corporation_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/corporations/{}/membertracking", corporation_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "mock ESI error" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/universe/names` returning the given names for any request body.
    pub fn create_universe_names_endpoint(
        &mut self,
        names: Vec<Value>,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/names")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(Value::Array(names).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/universe/names` failing with `status`.
    pub fn create_universe_names_error_endpoint(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("POST", "/universe/names")
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "mock ESI error" }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/characters/{character_id}/roles`.
    pub fn create_character_roles_endpoint(
        &mut self,
        character_id: i64,
        roles: Vec<&str>,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/roles", character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "roles": roles }).to_string())
            .expect(expected_requests)
            .create()
    }

    /// Create a mock endpoint at `/characters/{character_id}/roles` failing with `status`.
    pub fn create_character_roles_error_endpoint(
        &mut self,
        character_id: i64,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        let url = format!("/characters/{}/roles", character_id);

        self.setup
            .server
            .mock("GET", url.as_str())
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(json!({ "error": "mock ESI error" }).to_string())
            .expect(expected_requests)
            .create()
    }
}
