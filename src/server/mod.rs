//! Server-side core of the corporation tracker.
//!
//! Contains configuration and startup, persistence repositories, the OAuth token lifecycle,
//! the director credential pool, member roster reconciliation and the cron scheduler that
//! drives it.

pub mod config;
pub mod data;
pub mod error;
pub mod esi;
pub mod model;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod task;
pub mod util;
