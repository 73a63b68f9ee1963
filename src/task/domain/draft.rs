//! Validated input payloads for task and note mutations.

use super::TaskDomainError;
use serde::Serialize;

/// Validated name/description payload for creating or editing a task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskDraft {
    name: String,
    description: String,
}

impl TaskDraft {
    /// Creates a validated draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTaskName`] or
    /// [`TaskDomainError::EmptyTaskDescription`] when either field is empty
    /// after trimming. Validation happens here, before anything is
    /// dispatched to the remote authority.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<Self, TaskDomainError> {
        let owned_name = name.into();
        let owned_description = description.into();
        if owned_name.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskName);
        }
        if owned_description.trim().is_empty() {
            return Err(TaskDomainError::EmptyTaskDescription);
        }
        Ok(Self {
            name: owned_name,
            description: owned_description,
        })
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
}

/// Validated content payload for appending a note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteDraft {
    content: String,
}

impl NoteDraft {
    /// Creates a validated note draft.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyNoteContent`] when the content is
    /// empty after trimming.
    pub fn new(content: impl Into<String>) -> Result<Self, TaskDomainError> {
        let owned_content = content.into();
        if owned_content.trim().is_empty() {
            return Err(TaskDomainError::EmptyNoteContent);
        }
        Ok(Self {
            content: owned_content,
        })
    }

    /// Returns the note content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}
