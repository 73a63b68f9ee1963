//! The task detail session.

use crate::board::ports::Notifier;
use crate::board::services::{BoardResult, TransitionEngine, TransitionOutcome};
use crate::session::TaskSelection;
use crate::store::ProjectTaskCache;
use crate::task::{
    domain::{NoteId, ProjectId, Task, TaskId, TaskStatus, UserRef},
    ports::TaskRemote,
    services::{TaskService, TaskServiceError},
};
use std::sync::Arc;
use thiserror::Error;

/// Errors raised by detail-session operations.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The referenced note is not on the open task.
    #[error("note '{0}' is not on the open task")]
    UnknownNote(NoteId),

    /// Only a note's author may delete it.
    #[error("only the note's author may delete it")]
    NotNoteAuthor,

    /// A repository-client failure.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

/// Result type for detail-session operations.
pub type SessionResult<T> = Result<T, SessionError>;

/// Manages the currently-opened task.
///
/// The session knows which task to address only through the URL selection
/// protocol. Status changes ride the same transition engine as the board's
/// drag path; notes are a sub-collection that never touches the board, so
/// note mutations invalidate only the single-task cache entry.
pub struct DetailSession<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    project: ProjectId,
    actor: UserRef,
    service: Arc<TaskService<R>>,
    cache: Arc<ProjectTaskCache>,
    engine: Arc<TransitionEngine<R, N>>,
    notifier: Arc<N>,
}

impl<R, N> DetailSession<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    /// Creates a detail session for one project.
    #[must_use]
    pub const fn new(
        project: ProjectId,
        actor: UserRef,
        service: Arc<TaskService<R>>,
        cache: Arc<ProjectTaskCache>,
        engine: Arc<TransitionEngine<R, N>>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            project,
            actor,
            service,
            cache,
            engine,
            notifier,
        }
    }

    /// Opens the task the selection addresses.
    ///
    /// Reads through the shared cache, fetching on a miss. Fails closed:
    /// when the selection names no task, or resolution fails for any reason
    /// (missing, rejected, structurally invalid), no detail view is shown —
    /// the failure is logged and the surrounding board keeps working.
    pub async fn open(&self, selection: &TaskSelection) -> Option<Task> {
        let task_id = selection.task_id()?;
        if let Some(task) = self.cache.task(&self.project, task_id) {
            return Some(task);
        }
        match self.service.task(&self.project, task_id).await {
            Ok(task) => {
                self.cache.insert_task(&self.project, task.clone());
                Some(task)
            }
            Err(error) => {
                tracing::warn!(
                    project = %self.project,
                    task = %task_id,
                    %error,
                    "task detail failed to load"
                );
                None
            }
        }
    }

    /// Changes the open task's status by direct selection.
    ///
    /// Identical contract to the board's drag path — same engine, same
    /// no-op short-circuit, same lock, same rollback semantics — without a
    /// drag gesture and without the manager gate. On commit the engine
    /// invalidates both the single-task entry and the project collection,
    /// since the board must reflect the change too.
    ///
    /// # Errors
    ///
    /// Returns [`crate::board::services::BoardError::TransitionInFlight`]
    /// when the task is locked.
    pub async fn set_status(
        &self,
        task: &Task,
        target: TaskStatus,
    ) -> BoardResult<TransitionOutcome> {
        self.engine
            .request(&self.project, task.id(), task.status(), target)
            .await
    }

    /// Appends a note to the open task.
    ///
    /// Invalidates only the single-task cache entry: notes are not shown on
    /// the board.
    ///
    /// # Errors
    ///
    /// Returns a domain error for empty content, or the remote's failure.
    pub async fn add_note(&self, task: &TaskId, content: &str) -> SessionResult<()> {
        match self.service.add_note(&self.project, task, content).await {
            Ok(()) => {
                self.cache.invalidate_task(&self.project, task);
                self.notifier.success("Note added");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Could not add the note");
                Err(err.into())
            }
        }
    }

    /// Deletes a note from the open task.
    ///
    /// Gated on authorship before dispatch: only the note's author may
    /// delete it, independent of the manager role. Invalidates only the
    /// single-task cache entry.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownNote`] when the note is not on the
    /// task, [`SessionError::NotNoteAuthor`] when the acting user did not
    /// write it, or the remote's failure.
    pub async fn delete_note(&self, task: &Task, note: &NoteId) -> SessionResult<()> {
        let existing = task
            .note(note)
            .ok_or_else(|| SessionError::UnknownNote(note.clone()))?;
        if existing.created_by().id() != self.actor.id() {
            return Err(SessionError::NotNoteAuthor);
        }
        match self.service.remove_note(&self.project, task.id(), note).await {
            Ok(()) => {
                self.cache.invalidate_task(&self.project, task.id());
                self.notifier.success("Note deleted");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Could not delete the note");
                Err(err.into())
            }
        }
    }
}
