//! Quick list use-case service.
//!
//! # Responsibility
//! - List/item flows for the quick lists section.
//! - Progress stats and the text share card consumed by the export
//!   surface.
//!
//! # Invariants
//! - New items append: `order` is one past the current maximum.
//! - Renames are trimmed and never blank.

use crate::model::quick_list::{QuickList, QuickListId, QuickListItem, QuickListItemId};
use crate::store::list_store::{QuickListFilter, QuickListStore};
use crate::store::StoreError;
use chrono::{DateTime, NaiveDate, Utc};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const DEFAULT_LIST_TITLE: &str = "Quick List";

static FILE_STEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^a-z0-9]+").expect("valid file stem regex"));

/// Service error for quick list use-cases.
#[derive(Debug)]
pub enum QuickListServiceError {
    /// Rename target title is empty or whitespace-only.
    BlankTitle,
    /// New item text is empty or whitespace-only.
    BlankItem,
    /// Target list does not exist.
    ListNotFound(QuickListId),
    /// Store-layer failure.
    Store(StoreError),
}

impl Display for QuickListServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "list title must not be blank"),
            Self::BlankItem => write!(f, "list item must not be blank"),
            Self::ListNotFound(id) => write!(f, "quick list not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for QuickListServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for QuickListServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound {
                entity: "quick_list",
                id,
            } => Self::ListNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Completion stats for one list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListProgress {
    pub completed: u32,
    pub total: u32,
}

impl ListProgress {
    /// Completion percentage, rounded to the nearest whole number.
    pub fn percent(self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (f64::from(self.completed) * 100.0 / f64::from(self.total)).round() as u32
    }
}

/// Quick lists section facade over a [`QuickListStore`].
pub struct QuickListService<S: QuickListStore> {
    store: S,
}

impl<S: QuickListStore> QuickListService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a list with the default title.
    pub fn create_list(
        &self,
        user_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Result<QuickList, QuickListServiceError> {
        let list = QuickList::new(user_id, DEFAULT_LIST_TITLE, now);
        self.store.create_list(&list)?;
        info!("event=quick_list_create module=service status=ok id={}", list.id);
        Ok(list)
    }

    /// Active (non-archived) lists for `user_id`, newest first.
    pub fn lists(&self, user_id: impl Into<String>) -> Result<Vec<QuickList>, QuickListServiceError> {
        Ok(self.store.query_lists(&QuickListFilter::for_user(user_id))?)
    }

    pub fn items(&self, list_id: QuickListId) -> Result<Vec<QuickListItem>, QuickListServiceError> {
        Ok(self.store.items_for_list(list_id)?)
    }

    /// Renames a list; the title is trimmed and must not be blank.
    pub fn rename_list(
        &self,
        id: QuickListId,
        title: &str,
        now: DateTime<Utc>,
    ) -> Result<QuickList, QuickListServiceError> {
        let trimmed = title.trim();
        if trimmed.is_empty() {
            return Err(QuickListServiceError::BlankTitle);
        }
        let mut list = self
            .store
            .get_list(id)?
            .ok_or(QuickListServiceError::ListNotFound(id))?;
        list.title = trimmed.to_string();
        list.updated_at = Some(now);
        self.store.update_list(&list)?;
        Ok(list)
    }

    /// Hides a list from the dashboard without deleting its items.
    pub fn archive_list(
        &self,
        id: QuickListId,
        now: DateTime<Utc>,
    ) -> Result<(), QuickListServiceError> {
        let mut list = self
            .store
            .get_list(id)?
            .ok_or(QuickListServiceError::ListNotFound(id))?;
        list.is_archived = true;
        list.updated_at = Some(now);
        Ok(self.store.update_list(&list)?)
    }

    /// Deletes a list together with its items.
    pub fn delete_list(&self, id: QuickListId) -> Result<(), QuickListServiceError> {
        self.store.delete_list(id)?;
        info!("event=quick_list_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Appends an item to a list.
    pub fn add_item(
        &self,
        list_id: QuickListId,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<QuickListItem, QuickListServiceError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(QuickListServiceError::BlankItem);
        }
        let next_order = self
            .store
            .items_for_list(list_id)?
            .iter()
            .map(|item| item.order)
            .max()
            .unwrap_or(0)
            + 1;
        let item = QuickListItem::new(list_id, trimmed, next_order, now);
        self.store.add_item(&item)?;
        Ok(item)
    }

    /// Flips the completion flag of `item`.
    pub fn toggle_item(
        &self,
        item: &QuickListItem,
        now: DateTime<Utc>,
    ) -> Result<QuickListItem, QuickListServiceError> {
        let mut updated = item.clone();
        updated.is_completed = !updated.is_completed;
        updated.updated_at = Some(now);
        self.store.update_item(&updated)?;
        Ok(updated)
    }

    pub fn delete_item(&self, id: QuickListItemId) -> Result<(), QuickListServiceError> {
        Ok(self.store.delete_item(id)?)
    }

    /// Removes all completed items of a list. Returns the removed count.
    pub fn delete_completed(&self, list_id: QuickListId) -> Result<u32, QuickListServiceError> {
        Ok(self.store.delete_completed_items(list_id)?)
    }

    /// Completion stats for the list footer and the share card.
    pub fn progress(&self, list_id: QuickListId) -> Result<ListProgress, QuickListServiceError> {
        let items = self.store.items_for_list(list_id)?;
        let completed = items.iter().filter(|item| item.is_completed).count() as u32;
        Ok(ListProgress {
            completed,
            total: items.len() as u32,
        })
    }

    /// Plain-text share card: title, date, checkbox lines, progress
    /// footer. The image rendering built on top of it is a presentation
    /// concern.
    pub fn share_text(
        &self,
        list_id: QuickListId,
        today: NaiveDate,
    ) -> Result<String, QuickListServiceError> {
        let list = self
            .store
            .get_list(list_id)?
            .ok_or(QuickListServiceError::ListNotFound(list_id))?;
        let items = self.store.items_for_list(list_id)?;
        let progress = ListProgress {
            completed: items.iter().filter(|item| item.is_completed).count() as u32,
            total: items.len() as u32,
        };

        let mut card = String::new();
        card.push_str(&list.title);
        card.push('\n');
        card.push_str(&today.format("%Y-%m-%d").to_string());
        card.push_str("\n\n");
        for (index, item) in items.iter().enumerate() {
            let mark = if item.is_completed { 'x' } else { ' ' };
            card.push_str(&format!("[{mark}] {}. {}\n", index + 1, item.item));
        }
        card.push_str(&format!(
            "\n{}/{} completed ({}%)\n",
            progress.completed,
            progress.total,
            progress.percent()
        ));
        Ok(card)
    }
}

/// Download file stem for a shared list: lowercased title with runs of
/// non-alphanumerics collapsed to dashes, suffixed with the share date.
pub fn share_file_stem(title: &str, date: NaiveDate) -> String {
    let lowered = title.to_lowercase();
    let dashed = FILE_STEM_RE.replace_all(&lowered, "-");
    let trimmed = dashed.trim_matches('-');
    let stem = if trimmed.is_empty() { "quick-list" } else { trimmed };
    format!("{stem}-{}", date.format("%Y-%m-%d"))
}
