//! Core domain logic for the Homeboard dashboard.
//! This crate is the single source of truth for business invariants;
//! persistence and multi-client sync live behind the `store` contracts.

pub mod logging;
pub mod model;
pub mod rank;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::chore::{Chore, ChoreIcon, ChoreId, ChoreValidationError};
pub use rank::chores::{rank_chores, RankedChore};
pub use service::chore_service::{ChoreService, NewChore};
pub use store::chore_store::{ChoreCallback, ChoreFilter, ChoreStore};
pub use store::memory::MemoryStore;
pub use store::subscription::Subscription;
pub use store::{StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
