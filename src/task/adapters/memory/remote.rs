//! In-memory remote authority for board synchronization tests.

use async_trait::async_trait;
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use crate::task::{
    domain::{
        ActivityId, ActivityRecord, Note, NoteDraft, NoteId, ProjectId, Task, TaskDraft, TaskId,
        TaskStatus, TaskSummary, UserRef, generate_object_id,
    },
    ports::{TaskRemote, TaskRemoteError, TaskRemoteResult},
};

/// Operations observed by the in-memory authority, in dispatch order.
///
/// Tests assert on this log to prove which requests did (or did not) leave
/// the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoteCall {
    /// `create_task` was dispatched.
    CreateTask(ProjectId),
    /// `task` was dispatched.
    GetTask(ProjectId, TaskId),
    /// `update_task` was dispatched.
    UpdateTask(ProjectId, TaskId),
    /// `delete_task` was dispatched.
    DeleteTask(ProjectId, TaskId),
    /// `set_status` was dispatched.
    SetStatus(ProjectId, TaskId, TaskStatus),
    /// `project_tasks` was dispatched.
    ProjectTasks(ProjectId),
    /// `create_note` was dispatched.
    CreateNote(ProjectId, TaskId),
    /// `delete_note` was dispatched.
    DeleteNote(ProjectId, TaskId, NoteId),
}

#[derive(Debug, Default)]
struct RemoteState {
    projects: HashMap<ProjectId, Vec<Task>>,
    calls: Vec<RemoteCall>,
    fail_next: Option<TaskRemoteError>,
}

/// Thread-safe in-memory stand-in for the remote authority.
///
/// Ids and timestamps come from the injected clock, status transitions
/// append activity records attributed to the bound actor, and the next
/// mutation can be scripted to fail — enough to drive every rollback and
/// reconciliation path deterministically.
pub struct InMemoryTaskRemote<C> {
    state: Arc<RwLock<RemoteState>>,
    clock: Arc<C>,
    actor: UserRef,
}

impl<C> InMemoryTaskRemote<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty authority acting on behalf of `actor`.
    ///
    /// The actor models the authenticated session the transport would carry;
    /// activity records and note authorship checks are attributed to it.
    #[must_use]
    pub fn new(clock: Arc<C>, actor: UserRef) -> Self {
        Self {
            state: Arc::new(RwLock::new(RemoteState::default())),
            clock,
            actor,
        }
    }

    /// Returns a handle over the same state acting as a different user.
    ///
    /// Models a second authenticated client against the same authority.
    #[must_use]
    pub fn with_actor(&self, actor: UserRef) -> Self {
        Self {
            state: Arc::clone(&self.state),
            clock: Arc::clone(&self.clock),
            actor,
        }
    }

    /// Registers an empty project.
    pub fn add_project(&self, project: &ProjectId) {
        let mut state = self.write();
        state.projects.entry(project.clone()).or_default();
    }

    /// Scripts the next recorded operation to fail with `err`.
    pub fn fail_next(&self, err: TaskRemoteError) {
        self.write().fail_next = Some(err);
    }

    /// Returns the operations dispatched so far.
    #[must_use]
    pub fn calls(&self) -> Vec<RemoteCall> {
        self.read().calls.clone()
    }

    /// Counts the `set_status` dispatches observed so far.
    #[must_use]
    pub fn status_dispatches(&self) -> usize {
        self.read()
            .calls
            .iter()
            .filter(|call| matches!(call, RemoteCall::SetStatus(..)))
            .count()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, RemoteState> {
        self.state
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, RemoteState> {
        self.state
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    /// Records the call and consumes a scripted failure if one is pending.
    fn begin(&self, call: RemoteCall) -> TaskRemoteResult<()> {
        let mut state = self.write();
        state.calls.push(call);
        state.fail_next.take().map_or(Ok(()), Err)
    }

    fn mint_id(&self) -> String {
        generate_object_id(self.clock.utc(), Uuid::new_v4())
    }
}

fn find_task_mut<'a>(
    tasks: &'a mut [Task],
    task: &TaskId,
) -> TaskRemoteResult<&'a mut Task> {
    tasks
        .iter_mut()
        .find(|candidate| candidate.id() == task)
        .ok_or(TaskRemoteError::NotFound)
}

#[async_trait]
impl<C> TaskRemote for InMemoryTaskRemote<C>
where
    C: Clock + Send + Sync,
{
    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> TaskRemoteResult<Task> {
        self.begin(RemoteCall::CreateTask(project.clone()))?;
        let id = TaskId::new(self.mint_id())
            .map_err(|err| TaskRemoteError::Validation(err.to_string()))?;
        let created = Task::new(id, draft, &*self.clock);
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        tasks.push(created.clone());
        Ok(created)
    }

    async fn task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<Task> {
        self.begin(RemoteCall::GetTask(project.clone(), task.clone()))?;
        let state = self.read();
        let tasks = state.projects.get(project).ok_or(TaskRemoteError::NotFound)?;
        tasks
            .iter()
            .find(|candidate| candidate.id() == task)
            .cloned()
            .ok_or(TaskRemoteError::NotFound)
    }

    async fn update_task(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &TaskDraft,
    ) -> TaskRemoteResult<()> {
        self.begin(RemoteCall::UpdateTask(project.clone(), task.clone()))?;
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        find_task_mut(tasks, task)?.apply_draft(draft, &*self.clock);
        Ok(())
    }

    async fn delete_task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<()> {
        self.begin(RemoteCall::DeleteTask(project.clone(), task.clone()))?;
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        let before = tasks.len();
        tasks.retain(|candidate| candidate.id() != task);
        if tasks.len() == before {
            return Err(TaskRemoteError::NotFound);
        }
        Ok(())
    }

    async fn set_status(
        &self,
        project: &ProjectId,
        task: &TaskId,
        status: TaskStatus,
    ) -> TaskRemoteResult<()> {
        self.begin(RemoteCall::SetStatus(project.clone(), task.clone(), status))?;
        let record_id = ActivityId::new(self.mint_id())
            .map_err(|err| TaskRemoteError::Validation(err.to_string()))?;
        let record = ActivityRecord::new(record_id, self.actor.clone(), status);
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        find_task_mut(tasks, task)?.record_transition(record, &*self.clock);
        Ok(())
    }

    async fn project_tasks(&self, project: &ProjectId) -> TaskRemoteResult<Vec<TaskSummary>> {
        self.begin(RemoteCall::ProjectTasks(project.clone()))?;
        let state = self.read();
        let tasks = state.projects.get(project).ok_or(TaskRemoteError::NotFound)?;
        Ok(tasks.iter().map(Task::summary).collect())
    }

    async fn create_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &NoteDraft,
    ) -> TaskRemoteResult<()> {
        self.begin(RemoteCall::CreateNote(project.clone(), task.clone()))?;
        let note_id = NoteId::new(self.mint_id())
            .map_err(|err| TaskRemoteError::Validation(err.to_string()))?;
        let now = self.clock.utc();
        let note = Note::new(note_id, draft.content(), self.actor.clone(), now, now);
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        find_task_mut(tasks, task)?.add_note(note, &*self.clock);
        Ok(())
    }

    async fn delete_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        note: &NoteId,
    ) -> TaskRemoteResult<()> {
        self.begin(RemoteCall::DeleteNote(
            project.clone(),
            task.clone(),
            note.clone(),
        ))?;
        let actor_id = self.actor.id().clone();
        let mut state = self.write();
        let tasks = state
            .projects
            .get_mut(project)
            .ok_or(TaskRemoteError::NotFound)?;
        let target = find_task_mut(tasks, task)?;
        let author = target
            .note(note)
            .map(|existing| existing.created_by().id().clone())
            .ok_or(TaskRemoteError::NotFound)?;
        if author != actor_id {
            return Err(TaskRemoteError::Unauthorized);
        }
        target.remove_note(note, &*self.clock);
        Ok(())
    }
}
