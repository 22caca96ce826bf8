//! In-memory store implementation.
//!
//! # Responsibility
//! - Implement every store contract over a mutex-guarded snapshot state.
//! - Drive chore subscriptions: each committed write re-materializes the
//!   snapshot per subscriber and invokes its callback.
//!
//! # Invariants
//! - Mutations commit atomically under the state lock.
//! - Subscriber callbacks run after the lock is released, so a callback
//!   may re-enter the store.
//!
//! Serves as the client-side cache in tests and demos; a production
//! adapter for the hosted sync service implements the same traits.

use crate::model::chore::{Chore, ChoreId};
use crate::model::note::{Comment, CommentId, Note, NoteId};
use crate::model::profile::{Profile, ProfileId};
use crate::model::quick_list::{QuickList, QuickListId, QuickListItem, QuickListItemId};
use crate::model::shopping::{ShoppingItem, ShoppingItemId};
use crate::store::chore_store::{ChoreCallback, ChoreFilter, ChoreStore};
use crate::store::list_store::{QuickListFilter, QuickListStore};
use crate::store::note_store::NoteStore;
use crate::store::profile_store::ProfileStore;
use crate::store::shopping_store::{ShoppingFilter, ShoppingStore};
use crate::store::subscription::Subscription;
use crate::store::{StoreError, StoreResult};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Shared in-memory store. Cloning yields another handle to the same state.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<State>>,
}

#[derive(Default)]
struct State {
    chores: BTreeMap<ChoreId, Chore>,
    notes: BTreeMap<NoteId, Note>,
    comments: BTreeMap<CommentId, Comment>,
    quick_lists: BTreeMap<QuickListId, QuickList>,
    quick_list_items: BTreeMap<QuickListItemId, QuickListItem>,
    shopping_items: BTreeMap<ShoppingItemId, ShoppingItem>,
    profiles: BTreeMap<ProfileId, Profile>,
    chore_subscribers: BTreeMap<u64, ChoreSubscriber>,
    next_subscriber_id: u64,
}

struct ChoreSubscriber {
    filter: ChoreFilter,
    callback: ChoreCallback,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        // A poisoned lock only means another thread panicked mid-write;
        // the snapshot state itself stays usable.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Collects (callback, snapshot) pairs for subscribers watching
    /// `affected_user` under the lock, then invokes them with the lock
    /// released.
    fn notify_chore_subscribers(&self, affected_user: &str) {
        let pending: Vec<(ChoreCallback, Vec<Chore>)> = {
            let state = self.state();
            state
                .chore_subscribers
                .values()
                .filter(|subscriber| subscriber.filter.user_id == affected_user)
                .map(|subscriber| {
                    (
                        Arc::clone(&subscriber.callback),
                        chore_snapshot(&state, &subscriber.filter),
                    )
                })
                .collect()
        };

        for (callback, snapshot) in pending {
            callback(&snapshot);
        }
    }
}

fn chore_snapshot(state: &State, filter: &ChoreFilter) -> Vec<Chore> {
    let mut chores: Vec<Chore> = state
        .chores
        .values()
        .filter(|chore| filter.matches(chore))
        .cloned()
        .collect();
    chores.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
    chores
}

impl ChoreStore for MemoryStore {
    fn query_chores(&self, filter: &ChoreFilter) -> StoreResult<Vec<Chore>> {
        Ok(chore_snapshot(&self.state(), filter))
    }

    fn create_chore(&self, chore: &Chore) -> StoreResult<ChoreId> {
        chore.validate()?;
        {
            let mut state = self.state();
            if state.chores.contains_key(&chore.id) {
                return Err(StoreError::DuplicateId {
                    entity: "chore",
                    id: chore.id,
                });
            }
            state.chores.insert(chore.id, chore.clone());
        }
        self.notify_chore_subscribers(&chore.user_id);
        Ok(chore.id)
    }

    fn update_chore(&self, chore: &Chore) -> StoreResult<()> {
        chore.validate()?;
        {
            let mut state = self.state();
            if !state.chores.contains_key(&chore.id) {
                return Err(StoreError::NotFound {
                    entity: "chore",
                    id: chore.id,
                });
            }
            state.chores.insert(chore.id, chore.clone());
        }
        self.notify_chore_subscribers(&chore.user_id);
        Ok(())
    }

    fn set_completion(&self, id: ChoreId, is_completed: bool) -> StoreResult<()> {
        let affected_user = {
            let mut state = self.state();
            let chore = state
                .chores
                .get_mut(&id)
                .ok_or(StoreError::NotFound { entity: "chore", id })?;
            chore.is_completed = is_completed;
            chore.user_id.clone()
        };
        self.notify_chore_subscribers(&affected_user);
        Ok(())
    }

    fn delete_chore(&self, id: ChoreId) -> StoreResult<()> {
        let affected_user = {
            let mut state = self.state();
            match state.chores.remove(&id) {
                Some(chore) => chore.user_id,
                None => return Err(StoreError::NotFound { entity: "chore", id }),
            }
        };
        self.notify_chore_subscribers(&affected_user);
        Ok(())
    }

    fn subscribe_chores(
        &self,
        filter: ChoreFilter,
        callback: ChoreCallback,
    ) -> StoreResult<Subscription> {
        let (id, initial) = {
            let mut state = self.state();
            let id = state.next_subscriber_id;
            state.next_subscriber_id += 1;
            let initial = chore_snapshot(&state, &filter);
            state.chore_subscribers.insert(
                id,
                ChoreSubscriber {
                    filter,
                    callback: Arc::clone(&callback),
                },
            );
            (id, initial)
        };

        callback(&initial);

        let weak: Weak<Mutex<State>> = Arc::downgrade(&self.inner);
        Ok(Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                let mut state = inner.lock().unwrap_or_else(PoisonError::into_inner);
                state.chore_subscribers.remove(&id);
            }
        }))
    }
}

impl NoteStore for MemoryStore {
    fn query_notes(&self) -> StoreResult<Vec<Note>> {
        let state = self.state();
        let mut notes: Vec<Note> = state.notes.values().cloned().collect();
        notes.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(notes)
    }

    fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>> {
        Ok(self.state().notes.get(&id).cloned())
    }

    fn create_note(&self, note: &Note) -> StoreResult<NoteId> {
        let mut state = self.state();
        if state.notes.contains_key(&note.id) {
            return Err(StoreError::DuplicateId {
                entity: "note",
                id: note.id,
            });
        }
        state.notes.insert(note.id, note.clone());
        Ok(note.id)
    }

    fn update_note(&self, note: &Note) -> StoreResult<()> {
        let mut state = self.state();
        if !state.notes.contains_key(&note.id) {
            return Err(StoreError::NotFound {
                entity: "note",
                id: note.id,
            });
        }
        state.notes.insert(note.id, note.clone());
        Ok(())
    }

    fn delete_note(&self, id: NoteId) -> StoreResult<()> {
        let mut state = self.state();
        if state.notes.remove(&id).is_none() {
            return Err(StoreError::NotFound { entity: "note", id });
        }
        state.comments.retain(|_, comment| comment.note_id != id);
        Ok(())
    }

    fn add_comment(&self, comment: &Comment) -> StoreResult<CommentId> {
        let mut state = self.state();
        if !state.notes.contains_key(&comment.note_id) {
            return Err(StoreError::NotFound {
                entity: "note",
                id: comment.note_id,
            });
        }
        if state.comments.contains_key(&comment.id) {
            return Err(StoreError::DuplicateId {
                entity: "comment",
                id: comment.id,
            });
        }
        state.comments.insert(comment.id, comment.clone());
        Ok(comment.id)
    }

    fn comments_for_note(&self, id: NoteId) -> StoreResult<Vec<Comment>> {
        let state = self.state();
        let mut comments: Vec<Comment> = state
            .comments
            .values()
            .filter(|comment| comment.note_id == id)
            .cloned()
            .collect();
        comments.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(comments)
    }
}

impl QuickListStore for MemoryStore {
    fn query_lists(&self, filter: &QuickListFilter) -> StoreResult<Vec<QuickList>> {
        let state = self.state();
        let mut lists: Vec<QuickList> = state
            .quick_lists
            .values()
            .filter(|list| {
                list.user_id == filter.user_id && (filter.include_archived || !list.is_archived)
            })
            .cloned()
            .collect();
        lists.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(lists)
    }

    fn get_list(&self, id: QuickListId) -> StoreResult<Option<QuickList>> {
        Ok(self.state().quick_lists.get(&id).cloned())
    }

    fn create_list(&self, list: &QuickList) -> StoreResult<QuickListId> {
        let mut state = self.state();
        if state.quick_lists.contains_key(&list.id) {
            return Err(StoreError::DuplicateId {
                entity: "quick_list",
                id: list.id,
            });
        }
        state.quick_lists.insert(list.id, list.clone());
        Ok(list.id)
    }

    fn update_list(&self, list: &QuickList) -> StoreResult<()> {
        let mut state = self.state();
        if !state.quick_lists.contains_key(&list.id) {
            return Err(StoreError::NotFound {
                entity: "quick_list",
                id: list.id,
            });
        }
        state.quick_lists.insert(list.id, list.clone());
        Ok(())
    }

    fn delete_list(&self, id: QuickListId) -> StoreResult<()> {
        let mut state = self.state();
        if state.quick_lists.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "quick_list",
                id,
            });
        }
        state.quick_list_items.retain(|_, item| item.list_id != id);
        Ok(())
    }

    fn items_for_list(&self, id: QuickListId) -> StoreResult<Vec<QuickListItem>> {
        let state = self.state();
        let mut items: Vec<QuickListItem> = state
            .quick_list_items
            .values()
            .filter(|item| item.list_id == id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.order.cmp(&b.order).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    fn add_item(&self, item: &QuickListItem) -> StoreResult<QuickListItemId> {
        let mut state = self.state();
        if !state.quick_lists.contains_key(&item.list_id) {
            return Err(StoreError::NotFound {
                entity: "quick_list",
                id: item.list_id,
            });
        }
        if state.quick_list_items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId {
                entity: "quick_list_item",
                id: item.id,
            });
        }
        state.quick_list_items.insert(item.id, item.clone());
        Ok(item.id)
    }

    fn update_item(&self, item: &QuickListItem) -> StoreResult<()> {
        let mut state = self.state();
        if !state.quick_list_items.contains_key(&item.id) {
            return Err(StoreError::NotFound {
                entity: "quick_list_item",
                id: item.id,
            });
        }
        state.quick_list_items.insert(item.id, item.clone());
        Ok(())
    }

    fn delete_item(&self, id: QuickListItemId) -> StoreResult<()> {
        let mut state = self.state();
        if state.quick_list_items.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "quick_list_item",
                id,
            });
        }
        Ok(())
    }

    fn delete_completed_items(&self, list_id: QuickListId) -> StoreResult<u32> {
        let mut state = self.state();
        if !state.quick_lists.contains_key(&list_id) {
            return Err(StoreError::NotFound {
                entity: "quick_list",
                id: list_id,
            });
        }
        let before = state.quick_list_items.len();
        state
            .quick_list_items
            .retain(|_, item| item.list_id != list_id || !item.is_completed);
        Ok((before - state.quick_list_items.len()) as u32)
    }
}

impl ShoppingStore for MemoryStore {
    fn query_items(&self, filter: &ShoppingFilter) -> StoreResult<Vec<ShoppingItem>> {
        let state = self.state();
        let mut items: Vec<ShoppingItem> = state
            .shopping_items
            .values()
            .filter(|item| item.user_id == filter.user_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    fn add_item(&self, item: &ShoppingItem) -> StoreResult<ShoppingItemId> {
        let mut state = self.state();
        if state.shopping_items.contains_key(&item.id) {
            return Err(StoreError::DuplicateId {
                entity: "shopping_item",
                id: item.id,
            });
        }
        state.shopping_items.insert(item.id, item.clone());
        Ok(item.id)
    }

    fn set_completion(&self, id: ShoppingItemId, is_completed: bool) -> StoreResult<()> {
        let mut state = self.state();
        let item = state.shopping_items.get_mut(&id).ok_or(StoreError::NotFound {
            entity: "shopping_item",
            id,
        })?;
        item.is_completed = is_completed;
        Ok(())
    }

    fn delete_item(&self, id: ShoppingItemId) -> StoreResult<()> {
        let mut state = self.state();
        if state.shopping_items.remove(&id).is_none() {
            return Err(StoreError::NotFound {
                entity: "shopping_item",
                id,
            });
        }
        Ok(())
    }

    fn delete_completed(&self, filter: &ShoppingFilter) -> StoreResult<u32> {
        let mut state = self.state();
        let before = state.shopping_items.len();
        state
            .shopping_items
            .retain(|_, item| item.user_id != filter.user_id || !item.is_completed);
        Ok((before - state.shopping_items.len()) as u32)
    }
}

impl ProfileStore for MemoryStore {
    fn find_by_user(&self, user_id: &str) -> StoreResult<Option<Profile>> {
        let state = self.state();
        let mut matches: Vec<&Profile> = state
            .profiles
            .values()
            .filter(|profile| profile.user_id == user_id)
            .collect();
        matches.sort_by_key(|profile| (profile.created_at, profile.id));
        Ok(matches.first().map(|profile| (*profile).clone()))
    }

    fn upsert_profile(&self, profile: &Profile) -> StoreResult<ProfileId> {
        let mut state = self.state();
        state.profiles.insert(profile.id, profile.clone());
        Ok(profile.id)
    }
}
