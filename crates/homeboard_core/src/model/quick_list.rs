//! Quick list and quick list item records.
//!
//! # Invariants
//! - Items belong to exactly one list via `list_id`.
//! - `order` is an append position; new items take `max(order) + 1`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type QuickListId = Uuid;
pub type QuickListItemId = Uuid;

/// Named checklist owned by one account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickList {
    pub id: QuickListId,
    #[serde(rename = "user_id")]
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuickList {
    pub fn new(
        user_id: impl Into<String>,
        title: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id: user_id.into(),
            title: title.into(),
            is_archived: false,
            created_at,
            updated_at: None,
        }
    }
}

/// Single checklist line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickListItem {
    pub id: QuickListItemId,
    pub list_id: QuickListId,
    pub item: String,
    pub is_completed: bool,
    pub order: i64,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QuickListItem {
    pub fn new(
        list_id: QuickListId,
        item: impl Into<String>,
        order: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            list_id,
            item: item.into(),
            is_completed: false,
            order,
            created_at,
            updated_at: None,
        }
    }
}
