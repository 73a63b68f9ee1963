//! Notes attached to a task.

use super::{NoteId, UserRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A note on a task.
///
/// Content is immutable once created; a note only ever changes by being
/// deleted, and only by its author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    id: NoteId,
    content: String,
    created_by: UserRef,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a note as reported by the remote authority.
    #[must_use]
    pub fn new(
        id: NoteId,
        content: impl Into<String>,
        created_by: UserRef,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            content: content.into(),
            created_by,
            created_at,
            updated_at,
        }
    }

    /// Returns the note identifier.
    #[must_use]
    pub const fn id(&self) -> &NoteId {
        &self.id
    }

    /// Returns the note content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the author reference.
    #[must_use]
    pub const fn created_by(&self) -> &UserRef {
        &self.created_by
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-modified timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
