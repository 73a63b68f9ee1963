//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The identifier is not a well-formed remote object id.
    #[error("invalid object id '{0}', expected 24 hexadecimal characters")]
    InvalidObjectId(String),

    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyTaskName,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyTaskDescription,

    /// The note content is empty after trimming.
    #[error("note content must not be empty")]
    EmptyNoteContent,
}

/// Error returned while parsing task statuses from wire data or drop targets.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);
