//! Chore store contract.
//!
//! # Responsibility
//! - CRUD over chore records plus snapshot subscriptions.
//!
//! # Invariants
//! - `query_chores` returns records for one account, ordered by
//!   `created_at` then id, so downstream ranking stays deterministic.
//! - Write paths call `Chore::validate()` before committing.
//! - Every committed write delivers a fresh full snapshot to each
//!   subscriber whose filter matches.

use crate::model::chore::{Chore, ChoreId};
use crate::store::subscription::Subscription;
use crate::store::StoreResult;
use std::sync::Arc;

/// Snapshot callback invoked on subscribe and after every matching write.
pub type ChoreCallback = Arc<dyn Fn(&[Chore]) + Send + Sync>;

/// Account scope for chore queries and subscriptions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoreFilter {
    pub user_id: String,
}

impl ChoreFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }

    pub fn matches(&self, chore: &Chore) -> bool {
        chore.user_id == self.user_id
    }
}

/// Store contract for chore records.
pub trait ChoreStore {
    /// Returns the current snapshot for `filter`.
    fn query_chores(&self, filter: &ChoreFilter) -> StoreResult<Vec<Chore>>;

    /// Inserts a new chore. Fails on duplicate id or validation error.
    fn create_chore(&self, chore: &Chore) -> StoreResult<ChoreId>;

    /// Replaces an existing chore record.
    fn update_chore(&self, chore: &Chore) -> StoreResult<()>;

    /// Flips only the completion flag of an existing chore.
    fn set_completion(&self, id: ChoreId, is_completed: bool) -> StoreResult<()>;

    /// Removes a chore record.
    fn delete_chore(&self, id: ChoreId) -> StoreResult<()>;

    /// Registers `callback` for snapshots matching `filter`.
    ///
    /// The current snapshot is delivered once before this call returns;
    /// afterwards the callback fires after every committed matching write
    /// until the returned handle is cancelled.
    fn subscribe_chores(
        &self,
        filter: ChoreFilter,
        callback: ChoreCallback,
    ) -> StoreResult<Subscription>;
}
