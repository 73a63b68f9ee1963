//! Task aggregate root and the reduced board summary.

use super::{ActivityRecord, Note, NoteId, TaskDraft, TaskId, TaskStatus};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Task aggregate root.
///
/// The full shape returned by a single-task read: board metadata plus the
/// activity timeline and the note sub-collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    name: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    activity: Vec<ActivityRecord>,
    notes: Vec<Note>,
}

/// Parameter object for reconstructing a task reported by the remote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskData {
    /// Task identifier.
    pub id: TaskId,
    /// Task name.
    pub name: String,
    /// Task description.
    pub description: String,
    /// Current workflow status.
    pub status: TaskStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
    /// Status-change activity records in transition order.
    pub activity: Vec<ActivityRecord>,
    /// Notes in creation order.
    pub notes: Vec<Note>,
}

impl Task {
    /// Creates a fresh task from a validated draft.
    ///
    /// New tasks always start in [`TaskStatus::Pending`] with an empty
    /// activity timeline and no notes.
    #[must_use]
    pub fn new(id: TaskId, draft: &TaskDraft, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id,
            name: draft.name().to_owned(),
            description: draft.description().to_owned(),
            status: TaskStatus::Pending,
            created_at: timestamp,
            updated_at: timestamp,
            activity: Vec::new(),
            notes: Vec::new(),
        }
    }

    /// Reconstructs a task from remote data.
    #[must_use]
    pub fn from_data(data: TaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            status: data.status,
            created_at: data.created_at,
            updated_at: data.updated_at,
            activity: data.activity,
            notes: data.notes,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest mutation timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns the raw activity records in the order the remote reported
    /// them.
    #[must_use]
    pub fn activity(&self) -> &[ActivityRecord] {
        &self.activity
    }

    /// Returns the activity timeline ordered by the instant embedded in each
    /// record id.
    ///
    /// Records within the same embedded second keep their reported order.
    #[must_use]
    pub fn timeline(&self) -> Vec<&ActivityRecord> {
        let mut ordered: Vec<&ActivityRecord> = self.activity.iter().collect();
        ordered.sort_by_key(|record| record.recorded_at());
        ordered
    }

    /// Returns the notes in creation order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Finds a note by identifier.
    #[must_use]
    pub fn note(&self, id: &NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id() == id)
    }

    /// Reduces the aggregate to its board summary.
    #[must_use]
    pub fn summary(&self) -> TaskSummary {
        TaskSummary {
            id: self.id.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            status: self.status,
        }
    }

    /// Applies an edit draft to the task.
    pub fn apply_draft(&mut self, draft: &TaskDraft, clock: &impl Clock) {
        self.name = draft.name().to_owned();
        self.description = draft.description().to_owned();
        self.touch(clock);
    }

    /// Records a status transition, appending its activity record.
    ///
    /// The timeline is append-only: existing records are never rewritten.
    pub fn record_transition(&mut self, record: ActivityRecord, clock: &impl Clock) {
        self.status = record.status();
        self.activity.push(record);
        self.touch(clock);
    }

    /// Appends a note.
    pub fn add_note(&mut self, note: Note, clock: &impl Clock) {
        self.notes.push(note);
        self.touch(clock);
    }

    /// Removes a note by identifier, reporting whether it existed.
    pub fn remove_note(&mut self, id: &NoteId, clock: &impl Clock) -> bool {
        let before = self.notes.len();
        self.notes.retain(|note| note.id() != id);
        let removed = self.notes.len() != before;
        if removed {
            self.touch(clock);
        }
        removed
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}

/// Reduced task shape carried in a project's board collection.
///
/// Matches what the remote embeds in a project read; the timeline and notes
/// only travel with a full single-task read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSummary {
    id: TaskId,
    name: String,
    description: String,
    status: TaskStatus,
}

impl TaskSummary {
    /// Creates a board summary.
    #[must_use]
    pub fn new(
        id: TaskId,
        name: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            status,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> &TaskId {
        &self.id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the current workflow status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Moves the summary to a new status.
    ///
    /// This is the optimistic local write; the authoritative value arrives
    /// with the next refetch.
    pub const fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
