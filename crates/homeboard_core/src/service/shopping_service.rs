//! Shopping list use-case service.

use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::store::shopping_store::{ShoppingFilter, ShoppingStore};
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for shopping list use-cases.
#[derive(Debug)]
pub enum ShoppingServiceError {
    /// New item text is empty or whitespace-only.
    BlankItem,
    /// Store-layer failure.
    Store(StoreError),
}

impl Display for ShoppingServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankItem => write!(f, "shopping item must not be blank"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ShoppingServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::BlankItem => None,
        }
    }
}

impl From<StoreError> for ShoppingServiceError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Shopping section facade over a [`ShoppingStore`].
pub struct ShoppingService<S: ShoppingStore> {
    store: S,
}

impl<S: ShoppingStore> ShoppingService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current items for `user_id`, newest first.
    pub fn items(
        &self,
        user_id: impl Into<String>,
    ) -> Result<Vec<ShoppingItem>, ShoppingServiceError> {
        Ok(self.store.query_items(&ShoppingFilter::for_user(user_id))?)
    }

    /// Adds a trimmed, non-blank item.
    pub fn add_item(
        &self,
        user_id: impl Into<String>,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<ShoppingItem, ShoppingServiceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ShoppingServiceError::BlankItem);
        }
        let item = ShoppingItem::new(user_id, trimmed, now);
        self.store.add_item(&item)?;
        Ok(item)
    }

    /// Flips the completion flag of `item`.
    pub fn toggle_item(&self, item: &ShoppingItem) -> Result<(), ShoppingServiceError> {
        Ok(self.store.set_completion(item.id, !item.is_completed)?)
    }

    pub fn delete_item(&self, id: ShoppingItemId) -> Result<(), ShoppingServiceError> {
        Ok(self.store.delete_item(id)?)
    }

    /// Removes every completed item for `user_id`. Returns the count.
    pub fn clear_completed(
        &self,
        user_id: impl Into<String>,
    ) -> Result<u32, ShoppingServiceError> {
        Ok(self
            .store
            .delete_completed(&ShoppingFilter::for_user(user_id))?)
    }
}

/// Count of completed items in a loaded snapshot.
pub fn completed_count(items: &[ShoppingItem]) -> usize {
    items.iter().filter(|item| item.is_completed).count()
}
