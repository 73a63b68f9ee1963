//! Board controller: the gesture boundary and manager-gated mutations.

use crate::board::domain::{Board, DragDropEvent, ManagerRef, is_manager};
use crate::board::ports::Notifier;
use crate::board::services::{BoardError, BoardResult, TransitionEngine, TransitionOutcome};
use crate::store::ProjectTaskCache;
use crate::task::{
    domain::{ProjectId, Task, TaskId, TaskStatus, UserRef},
    ports::TaskRemote,
    services::TaskService,
};
use std::sync::Arc;

/// How a drag gesture resolved.
#[derive(Debug)]
pub enum DragOutcome {
    /// Canceled gesture or no resolved drop target; the board is untouched.
    Ignored,
    /// The gesture became a transition request and settled.
    Settled(TransitionOutcome),
}

/// Identity context the external session and project subsystems supply.
#[derive(Debug, Clone)]
pub struct BoardContext {
    /// The project whose board is being viewed.
    pub project: ProjectId,
    /// The project's manager reference.
    pub manager: ManagerRef,
    /// The authenticated user driving this view.
    pub actor: UserRef,
}

/// Orchestrates one project's board view.
///
/// Owns the gesture-recognition boundary — everything a drop report must
/// pass before it becomes a transition request — and the manager-gated
/// structural mutations. Reads go through the shared cache; a miss triggers
/// the authoritative refetch.
pub struct BoardController<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    context: BoardContext,
    service: Arc<TaskService<R>>,
    cache: Arc<ProjectTaskCache>,
    engine: Arc<TransitionEngine<R, N>>,
    notifier: Arc<N>,
}

impl<R, N> BoardController<R, N>
where
    R: TaskRemote,
    N: Notifier,
{
    /// Creates a controller for one project view.
    #[must_use]
    pub const fn new(
        context: BoardContext,
        service: Arc<TaskService<R>>,
        cache: Arc<ProjectTaskCache>,
        engine: Arc<TransitionEngine<R, N>>,
        notifier: Arc<N>,
    ) -> Self {
        Self {
            context,
            service,
            cache,
            engine,
            notifier,
        }
    }

    /// Reports whether the acting user manages this project.
    #[must_use]
    pub fn acting_user_is_manager(&self) -> bool {
        is_manager(&self.context.manager, Some(self.context.actor.id()))
    }

    /// Returns the board grouped from the cached collection, without
    /// touching the network.
    ///
    /// `None` when the collection was never loaded or is stale; callers
    /// wanting the refetch use [`Self::load_board`].
    #[must_use]
    pub fn board(&self) -> Option<Board> {
        self.cache
            .collection(&self.context.project)
            .map(|tasks| Board::group(&tasks))
    }

    /// Returns the board, refetching the collection on a cache miss.
    ///
    /// # Errors
    ///
    /// Returns the repository client's failure when the refetch fails.
    pub async fn load_board(&self) -> BoardResult<Board> {
        if let Some(tasks) = self.cache.collection(&self.context.project) {
            return Ok(Board::group(&tasks));
        }
        let tasks = self.service.project_tasks(&self.context.project).await?;
        self.cache
            .insert_collection(&self.context.project, tasks.clone());
        Ok(Board::group(&tasks))
    }

    /// Interprets a completed drag gesture.
    ///
    /// Canceled gestures and drops without a resolved target are ignored.
    /// Everything else must pass the gesture boundary in order: the acting
    /// user is the manager (a collaborator's drag is rejected here, before
    /// any optimistic write or dispatch), the source parses as a task id,
    /// the target parses as a status, and the task resolves in the cached
    /// collection. Accepted gestures hand over to the transition engine.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unauthorized`], an id/status parse error, or
    /// [`BoardError::UnknownTask`] when a precondition fails, and
    /// [`BoardError::TransitionInFlight`] when the task is locked.
    pub async fn handle_drag_end(&self, event: &DragDropEvent) -> BoardResult<DragOutcome> {
        if event.is_canceled() {
            return Ok(DragOutcome::Ignored);
        }
        let (Some(source), Some(target)) = (event.source(), event.target()) else {
            return Ok(DragOutcome::Ignored);
        };

        if !self.acting_user_is_manager() {
            tracing::warn!(
                project = %self.context.project,
                actor = %self.context.actor.id(),
                "drag rejected: acting user is not the manager"
            );
            return Err(BoardError::Unauthorized);
        }

        let task = TaskId::new(source)?;
        let status = TaskStatus::try_from(target)?;
        let current = self
            .cache
            .task_status(&self.context.project, &task)
            .ok_or_else(|| BoardError::UnknownTask(task.clone()))?;

        let outcome = self
            .engine
            .request(&self.context.project, &task, current, status)
            .await?;
        Ok(DragOutcome::Settled(outcome))
    }

    /// Creates a task on the board. Manager only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unauthorized`] for non-managers, or the
    /// repository client's failure.
    pub async fn create_task(&self, name: &str, description: &str) -> BoardResult<Task> {
        self.require_manager()?;
        match self
            .service
            .create(&self.context.project, name, description)
            .await
        {
            Ok(task) => {
                self.cache.invalidate(&self.context.project);
                self.notifier.success("Task created");
                Ok(task)
            }
            Err(err) => {
                self.notifier.error("Could not create the task");
                Err(err.into())
            }
        }
    }

    /// Edits a task's name and description. Manager only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unauthorized`] for non-managers, or the
    /// repository client's failure.
    pub async fn update_task(
        &self,
        task: &TaskId,
        name: &str,
        description: &str,
    ) -> BoardResult<()> {
        self.require_manager()?;
        match self
            .service
            .update(&self.context.project, task, name, description)
            .await
        {
            Ok(()) => {
                self.cache.invalidate(&self.context.project);
                self.cache.invalidate_task(&self.context.project, task);
                self.notifier.success("Task updated");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Could not update the task");
                Err(err.into())
            }
        }
    }

    /// Deletes a task from the board. Manager only.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Unauthorized`] for non-managers, or the
    /// repository client's failure.
    pub async fn delete_task(&self, task: &TaskId) -> BoardResult<()> {
        self.require_manager()?;
        match self.service.delete(&self.context.project, task).await {
            Ok(()) => {
                self.cache.invalidate(&self.context.project);
                self.cache.invalidate_task(&self.context.project, task);
                self.notifier.success("Task deleted");
                Ok(())
            }
            Err(err) => {
                self.notifier.error("Could not delete the task");
                Err(err.into())
            }
        }
    }

    fn require_manager(&self) -> BoardResult<()> {
        if self.acting_user_is_manager() {
            Ok(())
        } else {
            Err(BoardError::Unauthorized)
        }
    }
}
