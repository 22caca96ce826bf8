//! Chore use-case service.
//!
//! # Responsibility
//! - Save-path defaulting for new and edited chores.
//! - Produce the ranked display snapshot for the chores section.
//!
//! # Invariants
//! - A today-chore records the calendar date it was saved on, so a later
//!   edit to a dated schedule starts from a sensible value.
//! - `due_time` is always persisted; a blank picker becomes `00:00`.

use crate::model::chore::{Chore, ChoreIcon, ChoreId};
use crate::rank::chores::{rank_chores, RankedChore};
use crate::store::chore_store::{ChoreCallback, ChoreFilter, ChoreStore};
use crate::store::subscription::Subscription;
use crate::store::StoreResult;
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use log::info;

/// User input for creating a chore.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChore {
    pub title: String,
    pub icon: ChoreIcon,
    pub is_today: bool,
    /// Required when `is_today` is false; ignored otherwise.
    pub due_date: Option<NaiveDate>,
    pub due_time: Option<NaiveTime>,
}

impl NewChore {
    /// A today-item with the default icon, matching the add dialog's
    /// initial state.
    pub fn today(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            icon: ChoreIcon::default(),
            is_today: true,
            due_date: None,
            due_time: None,
        }
    }

    /// A dated item due at `due_date` + `due_time`.
    pub fn on_date(title: impl Into<String>, due_date: NaiveDate, due_time: NaiveTime) -> Self {
        Self {
            title: title.into(),
            icon: ChoreIcon::default(),
            is_today: false,
            due_date: Some(due_date),
            due_time: Some(due_time),
        }
    }
}

/// Chore section facade over a [`ChoreStore`].
pub struct ChoreService<S: ChoreStore> {
    store: S,
}

impl<S: ChoreStore> ChoreService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Saves a new chore for `user_id`, created at `now`.
    ///
    /// A today-chore stores the save date as its `due_date`; a missing
    /// `due_time` defaults to `00:00`. Validation failures surface from
    /// the store unchanged.
    pub fn add_chore(
        &self,
        user_id: impl Into<String>,
        input: NewChore,
        now: DateTime<Utc>,
    ) -> StoreResult<Chore> {
        let mut chore = Chore::new(user_id, input.title, now);
        chore.icon = input.icon;
        chore.is_today = input.is_today;
        chore.due_date = if input.is_today {
            Some(now.date_naive())
        } else {
            input.due_date
        };
        chore.due_time = Some(input.due_time.unwrap_or(NaiveTime::MIN));

        self.store.create_chore(&chore)?;
        info!(
            "event=chore_add module=service status=ok id={} is_today={}",
            chore.id, chore.is_today
        );
        Ok(chore)
    }

    /// Replaces an edited chore record, re-applying the `due_time`
    /// default.
    pub fn edit_chore(&self, chore: &Chore) -> StoreResult<()> {
        let mut updated = chore.clone();
        updated.due_time = Some(updated.due_time.unwrap_or(NaiveTime::MIN));
        self.store.update_chore(&updated)
    }

    /// Sets the completion flag to `is_completed`.
    pub fn toggle_completion(&self, id: ChoreId, is_completed: bool) -> StoreResult<()> {
        self.store.set_completion(id, is_completed)
    }

    pub fn delete_chore(&self, id: ChoreId) -> StoreResult<()> {
        self.store.delete_chore(id)?;
        info!("event=chore_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Current snapshot for `user_id`, ordered for display at `now`.
    pub fn ranked(
        &self,
        user_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> StoreResult<Vec<RankedChore>> {
        let chores = self
            .store
            .query_chores(&ChoreFilter::for_user(user_id))?;
        Ok(rank_chores(chores, now))
    }

    /// Subscribes the presentation layer to raw snapshots; callers rank
    /// each delivery with their own clock.
    pub fn subscribe(
        &self,
        user_id: impl Into<String>,
        callback: ChoreCallback,
    ) -> StoreResult<Subscription> {
        self.store
            .subscribe_chores(ChoreFilter::for_user(user_id), callback)
    }
}
