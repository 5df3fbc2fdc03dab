//! EVE Online service layer.
//!
//! Corporation records are created on demand from public ESI data. Characters are stored
//! together with their token pair when they log in through EVE SSO.

pub mod character;
pub mod corporation;
