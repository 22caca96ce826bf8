//! Shopping item store contract.
//!
//! # Invariants
//! - `query_items` is ordered by `created_at` descending, id ascending
//!   (newest purchases first).

use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::store::StoreResult;

/// Account scope for shopping item queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingFilter {
    pub user_id: String,
}

impl ShoppingFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
        }
    }
}

/// Store contract for the flat per-user shopping list.
pub trait ShoppingStore {
    fn query_items(&self, filter: &ShoppingFilter) -> StoreResult<Vec<ShoppingItem>>;

    fn add_item(&self, item: &ShoppingItem) -> StoreResult<ShoppingItemId>;

    fn set_completion(&self, id: ShoppingItemId, is_completed: bool) -> StoreResult<()>;

    fn delete_item(&self, id: ShoppingItemId) -> StoreResult<()>;

    /// Removes all completed items for one account. Returns the count.
    fn delete_completed(&self, filter: &ShoppingFilter) -> StoreResult<u32>;
}
