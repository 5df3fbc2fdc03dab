//! Database model type aliases.
//!
//! Short names for the SeaORM entity models returned by the services so signatures
//! don't need to reach into the generated `entity` crate.

/// Corporation whose roster can be tracked.
pub type EveCorporationModel = entity::eve_corporation::Model;

/// Character known locally, e.g. one that has logged in through EVE SSO.
pub type EveCharacterModel = entity::eve_character::Model;

/// Identity of a numbered director credential.
pub type DirectorCharacterModel = entity::director_character::Model;
