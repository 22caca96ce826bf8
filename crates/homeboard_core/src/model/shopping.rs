//! Shopping item record.
//!
//! Shopping items form a single flat per-user list, unlike quick lists
//! which group items under named lists.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type ShoppingItemId = Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShoppingItem {
    pub id: ShoppingItemId,
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub item: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

impl ShoppingItem {
    pub fn new(
        user_id: impl Into<String>,
        item: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            item: item.into(),
            is_completed: false,
            created_at,
        }
    }
}
