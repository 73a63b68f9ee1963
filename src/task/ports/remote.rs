//! Remote authority port for the task collection.

use crate::task::domain::{
    NoteDraft, NoteId, ProjectId, Task, TaskDraft, TaskId, TaskStatus, TaskSummary,
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for remote task operations.
pub type TaskRemoteResult<T> = Result<T, TaskRemoteError>;

/// Contract with the remote authority that owns the task collection.
///
/// All operations are addressed by `(project, task)`; only the reads are
/// idempotent from the caller's perspective. A retried `set_status` is safe
/// because status is assigned rather than incremented, but a retried
/// `create_task` would duplicate — the engine therefore never retries.
///
/// `set_status` takes a typed [`TaskStatus`], so a value outside the closed
/// workflow domain is unrepresentable at this boundary; raw strings are
/// parsed (and rejected) before they get here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskRemote: Send + Sync {
    /// Creates a task in the project and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project does not
    /// resolve, or [`TaskRemoteError::Validation`] when the remote rejects
    /// the payload.
    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> TaskRemoteResult<Task>;

    /// Reads a single task with its activity timeline and notes.
    ///
    /// The response is schema-validated before being trusted; a structurally
    /// invalid body is a [`TaskRemoteError::Validation`], never a partial
    /// success.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project or task does
    /// not resolve.
    async fn task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<Task>;

    /// Replaces a task's name and description.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] or
    /// [`TaskRemoteError::Validation`].
    async fn update_task(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &TaskDraft,
    ) -> TaskRemoteResult<()>;

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project or task does
    /// not resolve.
    async fn delete_task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<()>;

    /// Assigns a task's workflow status.
    ///
    /// The remote appends the corresponding activity record as a side
    /// effect.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project or task does
    /// not resolve.
    async fn set_status(
        &self,
        project: &ProjectId,
        task: &TaskId,
        status: TaskStatus,
    ) -> TaskRemoteResult<()>;

    /// Reads the authoritative task summaries for a project.
    ///
    /// This is the refetch path that overwrites optimistic local state after
    /// an invalidation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project does not
    /// resolve.
    async fn project_tasks(&self, project: &ProjectId) -> TaskRemoteResult<Vec<TaskSummary>>;

    /// Appends a note to a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the project or task does
    /// not resolve.
    async fn create_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &NoteDraft,
    ) -> TaskRemoteResult<()>;

    /// Deletes a note from a task.
    ///
    /// The remote enforces note authorship independently of the client-side
    /// gate.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRemoteError::NotFound`] when the note does not resolve,
    /// or [`TaskRemoteError::Unauthorized`] when the caller is not the
    /// note's author.
    async fn delete_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        note: &NoteId,
    ) -> TaskRemoteResult<()>;
}

/// Errors returned by remote authority implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRemoteError {
    /// The referenced project, task, or note does not exist.
    #[error("referenced project, task, or note not found")]
    NotFound,

    /// The request payload or the remote response failed validation.
    #[error("validation failed: {0}")]
    Validation(String),

    /// The remote rejected the caller's authority over the mutation.
    #[error("not authorized to perform this board mutation")]
    Unauthorized,

    /// Failure below the protocol: connection, timeout, unreadable body.
    #[error("transport failure: {0}")]
    Transport(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRemoteError {
    /// Wraps a transport-level error.
    pub fn transport(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Transport(Arc::new(err))
    }
}
