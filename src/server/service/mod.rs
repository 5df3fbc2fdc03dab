//! Business logic services.
//!
//! Services return `Result` internally and convert failures into `bool`/`Option` only at
//! their public contract edge, after logging them once.

pub mod director;
pub mod eve;
pub mod member_tracking;
pub mod token;
