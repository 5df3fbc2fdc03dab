//! Server application models and type definitions.
//!
//! Contains application state, the token pair handled by the refresh protocol, director
//! identities, the authenticated ESI payloads and database model type aliases.

pub mod app;
pub mod auth;
pub mod db;
pub mod director;
pub mod esi;
pub mod token;
