//! EVE Online data repositories.
//!
//! Corporations are the affiliations whose rosters are tracked; characters are those known
//! locally, e.g. after logging in through EVE SSO.

pub mod character;
pub mod corporation;

#[cfg(test)]
mod tests;
