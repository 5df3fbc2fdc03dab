//! Utility constants and helpers shared by services and scheduled tasks.

pub mod eve;
