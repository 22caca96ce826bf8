//! Quick list store contract.
//!
//! # Invariants
//! - `query_lists` is ordered by `created_at` descending, id ascending.
//! - `items_for_list` is ordered by `order` ascending, id ascending.
//! - Deleting a list removes its items in the same transaction.

use crate::model::quick_list::{QuickList, QuickListId, QuickListItem, QuickListItemId};
use crate::store::StoreResult;

/// Account scope for quick list queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuickListFilter {
    pub user_id: String,
    /// Archived lists are hidden from the dashboard by default.
    pub include_archived: bool,
}

impl QuickListFilter {
    pub fn for_user(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            include_archived: false,
        }
    }
}

/// Store contract for quick lists and their items.
pub trait QuickListStore {
    fn query_lists(&self, filter: &QuickListFilter) -> StoreResult<Vec<QuickList>>;

    fn get_list(&self, id: QuickListId) -> StoreResult<Option<QuickList>>;

    fn create_list(&self, list: &QuickList) -> StoreResult<QuickListId>;

    fn update_list(&self, list: &QuickList) -> StoreResult<()>;

    /// Removes a list and every item belonging to it.
    fn delete_list(&self, id: QuickListId) -> StoreResult<()>;

    fn items_for_list(&self, id: QuickListId) -> StoreResult<Vec<QuickListItem>>;

    /// Adds an item to an existing list.
    fn add_item(&self, item: &QuickListItem) -> StoreResult<QuickListItemId>;

    fn update_item(&self, item: &QuickListItem) -> StoreResult<()>;

    fn delete_item(&self, id: QuickListItemId) -> StoreResult<()>;

    /// Removes all completed items of a list. Returns the removed count.
    fn delete_completed_items(&self, list_id: QuickListId) -> StoreResult<u32>;
}
