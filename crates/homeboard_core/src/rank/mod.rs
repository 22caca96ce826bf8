//! Display-ordering policies.
//!
//! # Responsibility
//! - Turn unordered record snapshots into the order the dashboard renders.
//! - Stay pure: every policy takes the current instant as an argument and
//!   never reads a global clock.

pub mod chores;
