//! Note use-case service.
//!
//! # Responsibility
//! - Note/comment create, update and delete flows.
//! - Visibility filtering for the notes section.
//! - Derive the plain-text/image preview projection for note cards.
//!
//! # Invariants
//! - Blank content never reaches the store; blank titles become
//!   `Untitled`.
//! - Deleting a note also deletes its comments (store contract).

use crate::model::note::{Comment, Note, NoteId};
use crate::model::profile::ProfileId;
use crate::store::note_store::NoteStore;
use crate::store::StoreError;
use chrono::{DateTime, Utc};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PREVIEW_MAX_CHARS: usize = 120;
const DEFAULT_NOTE_TITLE: &str = "Untitled";

static MARKDOWN_IMAGE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"!\[[^\]]*]\(([^)]+)\)").expect("valid image regex"));
static MARKDOWN_LINK_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]+)\)").expect("valid link regex"));
static MARKDOWN_SYMBOL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[*_`#>~\[\]()!]+").expect("valid markdown symbol regex"));
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for note use-cases.
#[derive(Debug)]
pub enum NoteServiceError {
    /// Note or comment content is empty or whitespace-only.
    BlankContent,
    /// Target note does not exist.
    NoteNotFound(NoteId),
    /// Store-layer failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankContent => write!(f, "note content must not be blank"),
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { entity: "note", id } => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Card preview projection derived from note content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotePreview {
    /// Sanitized summary text, capped at a card-sized length.
    pub preview_text: Option<String>,
    /// First markdown image path, if any.
    pub preview_image: Option<String>,
}

/// Notes section facade over a [`NoteStore`].
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Creates a note authored by `author`.
    pub fn add_note(
        &self,
        author: ProfileId,
        title: &str,
        content: &str,
        is_public: bool,
        now: DateTime<Utc>,
    ) -> Result<Note, NoteServiceError> {
        if content.trim().is_empty() {
            return Err(NoteServiceError::BlankContent);
        }
        let title = if title.trim().is_empty() {
            DEFAULT_NOTE_TITLE
        } else {
            title
        };

        let mut note = Note::new(title, content, author, now);
        note.is_public = is_public;
        self.store.create_note(&note)?;
        info!("event=note_add module=service status=ok id={}", note.id);
        Ok(note)
    }

    /// Replaces title/content/visibility of an existing note.
    pub fn update_note(
        &self,
        id: NoteId,
        title: &str,
        content: &str,
        is_public: bool,
        now: DateTime<Utc>,
    ) -> Result<Note, NoteServiceError> {
        if content.trim().is_empty() {
            return Err(NoteServiceError::BlankContent);
        }
        let mut note = self
            .store
            .get_note(id)?
            .ok_or(NoteServiceError::NoteNotFound(id))?;
        note.title = if title.trim().is_empty() {
            DEFAULT_NOTE_TITLE.to_string()
        } else {
            title.to_string()
        };
        note.content = content.to_string();
        note.is_public = is_public;
        note.updated_at = Some(now);

        self.store.update_note(&note)?;
        Ok(note)
    }

    /// Deletes a note together with its comments.
    pub fn delete_note(&self, id: NoteId) -> Result<(), NoteServiceError> {
        self.store.delete_note(id)?;
        info!("event=note_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Attaches a comment by `author` to an existing note.
    pub fn add_comment(
        &self,
        note_id: NoteId,
        author: ProfileId,
        content: &str,
        now: DateTime<Utc>,
    ) -> Result<Comment, NoteServiceError> {
        if content.trim().is_empty() {
            return Err(NoteServiceError::BlankContent);
        }
        let comment = Comment::new(note_id, author, content, now);
        self.store.add_comment(&comment)?;
        Ok(comment)
    }

    pub fn comments(&self, note_id: NoteId) -> Result<Vec<Comment>, NoteServiceError> {
        Ok(self.store.comments_for_note(note_id)?)
    }

    /// Notes `viewer` may see: public notes plus the viewer's own, newest
    /// first.
    pub fn visible_notes(
        &self,
        viewer: Option<ProfileId>,
    ) -> Result<Vec<Note>, NoteServiceError> {
        let notes = self.store.query_notes()?;
        Ok(notes
            .into_iter()
            .filter(|note| note.visible_to(viewer))
            .collect())
    }
}

/// Derives the card preview projection from raw note content.
///
/// Markdown images are stripped (the first one becomes `preview_image`),
/// links collapse to their text, remaining markers are removed, and
/// whitespace is normalized before capping the summary length.
pub fn derive_preview(content: &str) -> NotePreview {
    let preview_image = MARKDOWN_IMAGE_RE
        .captures(content)
        .and_then(|captures| captures.get(1))
        .map(|path| path.as_str().trim().to_string())
        .filter(|path| !path.is_empty());

    let without_images = MARKDOWN_IMAGE_RE.replace_all(content, " ");
    let links_as_text = MARKDOWN_LINK_RE.replace_all(&without_images, "$1");
    let without_symbols = MARKDOWN_SYMBOL_RE.replace_all(&links_as_text, " ");
    let normalized = WHITESPACE_RE
        .replace_all(&without_symbols, " ")
        .trim()
        .to_string();

    let preview_text = if normalized.is_empty() {
        None
    } else if normalized.chars().count() > PREVIEW_MAX_CHARS {
        let mut truncated: String = normalized.chars().take(PREVIEW_MAX_CHARS).collect();
        truncated.push_str("...");
        Some(truncated)
    } else {
        Some(normalized)
    };

    NotePreview {
        preview_text,
        preview_image,
    }
}
