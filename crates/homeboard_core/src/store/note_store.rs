//! Note/comment store contract.
//!
//! # Invariants
//! - `query_notes` is ordered by `created_at` descending, id ascending.
//! - `comments_for_note` is ordered by `created_at` ascending (reading
//!   order), id ascending.
//! - Deleting a note removes its comments in the same transaction.

use crate::model::note::{Comment, CommentId, Note, NoteId};
use crate::store::StoreResult;

/// Store contract for notes and their comments.
pub trait NoteStore {
    /// Returns all notes, newest first. Visibility is a caller concern.
    fn query_notes(&self) -> StoreResult<Vec<Note>>;

    fn get_note(&self, id: NoteId) -> StoreResult<Option<Note>>;

    fn create_note(&self, note: &Note) -> StoreResult<NoteId>;

    /// Replaces an existing note record.
    fn update_note(&self, note: &Note) -> StoreResult<()>;

    /// Removes a note and every comment attached to it.
    fn delete_note(&self, id: NoteId) -> StoreResult<()>;

    /// Attaches a comment to an existing note.
    fn add_comment(&self, comment: &Comment) -> StoreResult<CommentId>;

    fn comments_for_note(&self, id: NoteId) -> StoreResult<Vec<Comment>>;
}
