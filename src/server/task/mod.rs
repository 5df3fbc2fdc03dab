//! Batch tasks run by the scheduler.

pub mod member_tracking;
