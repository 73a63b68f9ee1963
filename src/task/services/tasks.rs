//! Service layer fronting the remote authority with client-side validation.

use crate::task::{
    domain::{NoteDraft, NoteId, ProjectId, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus, TaskSummary},
    ports::{TaskRemote, TaskRemoteError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task repository operations.
#[derive(Debug, Error)]
pub enum TaskServiceError {
    /// Input validation failed before anything was dispatched.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// The remote authority rejected or failed the operation.
    #[error(transparent)]
    Remote(#[from] TaskRemoteError),
}

/// Result type for task repository operations.
pub type TaskServiceResult<T> = Result<T, TaskServiceError>;

/// The task repository client.
///
/// Validates input into domain drafts before dispatching, so an empty name,
/// description, or note never reaches the wire, and forwards the remote's
/// typed failures unchanged. Nothing here retries: callers decide how a
/// failure surfaces.
#[derive(Clone)]
pub struct TaskService<R>
where
    R: TaskRemote,
{
    remote: Arc<R>,
}

impl<R> TaskService<R>
where
    R: TaskRemote,
{
    /// Creates a task repository client over the given remote.
    #[must_use]
    pub const fn new(remote: Arc<R>) -> Self {
        Self { remote }
    }

    /// Creates a task in the project.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an empty name or description, or the
    /// remote's failure.
    pub async fn create(
        &self,
        project: &ProjectId,
        name: &str,
        description: &str,
    ) -> TaskServiceResult<Task> {
        let draft = TaskDraft::new(name, description)?;
        Ok(self.remote.create_task(project, &draft).await?)
    }

    /// Reads a single task with its timeline and notes.
    ///
    /// # Errors
    ///
    /// Returns the remote's failure; a structurally invalid response is a
    /// validation failure, never a partial task.
    pub async fn task(&self, project: &ProjectId, task: &TaskId) -> TaskServiceResult<Task> {
        Ok(self.remote.task(project, task).await?)
    }

    /// Replaces a task's name and description.
    ///
    /// # Errors
    ///
    /// Returns a domain error for an empty name or description, or the
    /// remote's failure.
    pub async fn update(
        &self,
        project: &ProjectId,
        task: &TaskId,
        name: &str,
        description: &str,
    ) -> TaskServiceResult<()> {
        let draft = TaskDraft::new(name, description)?;
        Ok(self.remote.update_task(project, task, &draft).await?)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns the remote's failure.
    pub async fn delete(&self, project: &ProjectId, task: &TaskId) -> TaskServiceResult<()> {
        Ok(self.remote.delete_task(project, task).await?)
    }

    /// Assigns a task's workflow status.
    ///
    /// # Errors
    ///
    /// Returns the remote's failure.
    pub async fn set_status(
        &self,
        project: &ProjectId,
        task: &TaskId,
        status: TaskStatus,
    ) -> TaskServiceResult<()> {
        Ok(self.remote.set_status(project, task, status).await?)
    }

    /// Reads the authoritative task summaries for the project.
    ///
    /// # Errors
    ///
    /// Returns the remote's failure.
    pub async fn project_tasks(&self, project: &ProjectId) -> TaskServiceResult<Vec<TaskSummary>> {
        Ok(self.remote.project_tasks(project).await?)
    }

    /// Appends a note to a task.
    ///
    /// # Errors
    ///
    /// Returns a domain error for empty content, or the remote's failure.
    pub async fn add_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        content: &str,
    ) -> TaskServiceResult<()> {
        let draft = NoteDraft::new(content)?;
        Ok(self.remote.create_note(project, task, &draft).await?)
    }

    /// Deletes a note from a task.
    ///
    /// # Errors
    ///
    /// Returns the remote's failure.
    pub async fn remove_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        note: &NoteId,
    ) -> TaskServiceResult<()> {
        Ok(self.remote.delete_note(project, task, note).await?)
    }
}
