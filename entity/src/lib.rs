//! SeaORM entities for the corporation member tracking schema.

pub mod prelude;

pub mod corporation_member;
pub mod director_character;
pub mod director_token;
pub mod eve_character;
pub mod eve_character_token;
pub mod eve_corporation;
