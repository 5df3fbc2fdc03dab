//! Test utilities for the corporation tracker.
//!
//! Tests are set up in two phases: a [`TestBuilder`] declares tables, database fixtures and
//! mock ESI / EVE SSO endpoints, then `build()` returns a [`TestContext`] holding the
//! in-memory database, the mock server and an ESI client pointed at it.

pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod model;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;
pub use model::MockToken;

pub mod prelude {
    pub use crate::{
        fixtures::{auth::factory as auth_factory, eve::factory},
        MockToken, TestBuilder, TestContext, TestError,
    };
}
