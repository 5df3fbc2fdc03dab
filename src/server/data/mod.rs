//! Data access layer repositories.
//!
//! Repositories are generic over `ConnectionTrait` so callers can pass either a pooled
//! connection or a transaction. Multi-record changes are committed by the service layer.

pub mod director;
pub mod eve;
pub mod member;
pub mod token;

#[cfg(test)]
mod tests;
