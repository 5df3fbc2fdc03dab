//! Test fixture modules for database and HTTP mock creation.
//!
//! - `auth` - EVE SSO token endpoint responses
//! - `director` - Director credentials and corporation member records
//! - `eve` - Corporations, characters & character tokens plus the ESI endpoints serving them

pub mod auth;
pub mod director;
pub mod eve;
