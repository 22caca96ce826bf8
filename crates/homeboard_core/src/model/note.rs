//! Note and comment records.
//!
//! # Responsibility
//! - Mirror the `notes` and `comments` entities of the external schema.
//! - Keep authorship links by profile id so visibility can be decided
//!   without loading profile records.

use crate::model::profile::ProfileId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type NoteId = Uuid;
pub type CommentId = Uuid;

/// Free-form note shown on the dashboard notes section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    pub content: String,
    /// Public notes are visible to every profile; private ones only to
    /// their author.
    pub is_public: bool,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Authoring profile. Absent on records imported before profiles
    /// existed.
    #[serde(default)]
    pub author_id: Option<ProfileId>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Note {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        author_id: ProfileId,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            content: content.into(),
            is_public: false,
            tags: Vec::new(),
            author_id: Some(author_id),
            created_at,
            updated_at: None,
        }
    }

    /// Whether `viewer` may see this note.
    pub fn visible_to(&self, viewer: Option<ProfileId>) -> bool {
        self.is_public || (self.author_id.is_some() && self.author_id == viewer)
    }
}

/// Comment attached to a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub note_id: NoteId,
    #[serde(default)]
    pub author_id: Option<ProfileId>,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Comment {
    pub fn new(
        note_id: NoteId,
        author_id: ProfileId,
        content: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            note_id,
            author_id: Some(author_id),
            content: content.into(),
            created_at,
            updated_at: None,
        }
    }
}
