//! The status transition engine shared by the board and the detail session.

use crate::board::ports::Notifier;
use crate::store::ProjectTaskCache;
use crate::task::{
    domain::{ParseTaskStatusError, ProjectId, TaskDomainError, TaskId, TaskStatus},
    ports::TaskRemote,
    services::{TaskService, TaskServiceError},
};
use std::collections::HashSet;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

/// Errors raised by board operations.
///
/// Transition preconditions surface here; an accepted transition that the
/// remote later fails settles as a [`TransitionOutcome::RolledBack`]
/// instead.
#[derive(Debug, Error)]
pub enum BoardError {
    /// A non-manager attempted a manager-only board mutation.
    #[error("only the project manager may modify the board")]
    Unauthorized,

    /// The dragged id does not resolve in the cached collection.
    #[error("unknown task '{0}' in drag gesture")]
    UnknownTask(TaskId),

    /// The task already has a transition in flight.
    #[error("task '{0}' already has a transition in flight")]
    TransitionInFlight(TaskId),

    /// The drop target is not a workflow status.
    #[error(transparent)]
    InvalidDropTarget(#[from] ParseTaskStatusError),

    /// The drag source is not a well-formed task id.
    #[error(transparent)]
    InvalidSource(#[from] TaskDomainError),

    /// A repository-client failure outside the transition path.
    #[error(transparent)]
    Service(#[from] TaskServiceError),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;

/// How an accepted status transition settled.
///
/// The request lifecycle is `Requested -> (Committed | RolledBack)`; a
/// same-status request never leaves `Idle` and settles as [`Self::NoChange`].
#[derive(Debug)]
pub enum TransitionOutcome {
    /// Target equals the current status; nothing was dispatched.
    NoChange,
    /// The remote confirmed the transition.
    Committed {
        /// Status before the transition.
        from: TaskStatus,
        /// Status after the transition.
        to: TaskStatus,
    },
    /// The remote failed the transition; local state awaits refetch.
    RolledBack {
        /// Status the task still holds on the server.
        from: TaskStatus,
        /// Status the optimistic write moved the task into.
        to: TaskStatus,
        /// The failure the remote reported.
        error: TaskServiceError,
    },
}

/// Drives the per-transition state machine.
///
/// One engine instance serves every view of a project: the per-task
/// in-flight lock lives here, so a task can never carry two outstanding
/// transitions regardless of which view requested them.
pub struct TransitionEngine<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    service: Arc<TaskService<R>>,
    cache: Arc<ProjectTaskCache>,
    notifier: Arc<N>,
    in_flight: Mutex<HashSet<TaskId>>,
}

impl<R, N> TransitionEngine<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    /// Creates a transition engine.
    #[must_use]
    pub fn new(
        service: Arc<TaskService<R>>,
        cache: Arc<ProjectTaskCache>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            service,
            cache,
            notifier,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    /// Requests a status transition for a task.
    ///
    /// A same-status request terminates immediately with no dispatch. An
    /// accepted request applies the optimistic write, dispatches
    /// `set_status`, and settles by matching the remote's result:
    ///
    /// - success invalidates both cache levels and notifies success;
    /// - failure notifies failure exactly once and leaves the optimistic
    ///   write in place — the next authoritative refetch restores the
    ///   server's truth. Until that refetch lands, the board may show a
    ///   status the server never accepted; that staleness window is the
    ///   accepted trade-off for a board that never blocks on the network.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::TransitionInFlight`] when the task already has
    /// an outstanding transition.
    pub async fn request(
        &self,
        project: &ProjectId,
        task: &TaskId,
        current: TaskStatus,
        target: TaskStatus,
    ) -> BoardResult<TransitionOutcome> {
        if current == target {
            return Ok(TransitionOutcome::NoChange);
        }

        {
            let mut in_flight = self.in_flight.lock().await;
            if !in_flight.insert(task.clone()) {
                return Err(BoardError::TransitionInFlight(task.clone()));
            }
        }

        tracing::debug!(%project, %task, from = %current, to = %target, "transition requested");
        self.cache.apply_status(project, task, target);
        let result = self.service.set_status(project, task, target).await;
        self.in_flight.lock().await.remove(task);

        match result {
            Ok(()) => {
                self.cache.invalidate(project);
                self.cache.invalidate_task(project, task);
                tracing::debug!(%project, %task, to = %target, "transition committed");
                self.notifier.success("Task updated");
                Ok(TransitionOutcome::Committed {
                    from: current,
                    to: target,
                })
            }
            Err(error) => {
                tracing::warn!(%project, %task, to = %target, %error, "transition rolled back");
                self.notifier.error("Could not update the task");
                Ok(TransitionOutcome::RolledBack {
                    from: current,
                    to: target,
                    error,
                })
            }
        }
    }

    /// Reports whether a task currently has a transition in flight.
    pub async fn is_in_flight(&self, task: &TaskId) -> bool {
        self.in_flight.lock().await.contains(task)
    }
}
