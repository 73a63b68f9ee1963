//! Shared task cache with explicit invalidation.

use crate::task::domain::{ProjectId, Task, TaskId, TaskStatus, TaskSummary};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cached value plus its staleness mark.
#[derive(Debug, Clone)]
struct Entry<T> {
    value: T,
    stale: bool,
}

impl<T> Entry<T> {
    const fn fresh(value: T) -> Self {
        Self {
            value,
            stale: false,
        }
    }
}

#[derive(Debug, Default)]
struct CacheState {
    collections: HashMap<ProjectId, Entry<Vec<TaskSummary>>>,
    tasks: HashMap<(ProjectId, TaskId), Entry<Task>>,
}

/// The one store shared by the board view and the detail session.
///
/// Holds the last known project collections (board summaries) and single
/// tasks (detail reads). Invalidation marks an entry stale; a stale entry
/// reads as a miss, which is what triggers the authoritative refetch.
/// Inserts are last-writer-wins: whichever refetch lands last is the truth
/// the views see. There is no locking beyond the interior mutability here —
/// consistency across views comes from invalidation, not mutual exclusion.
#[derive(Debug, Default)]
pub struct ProjectTaskCache {
    state: RwLock<CacheState>,
}

impl ProjectTaskCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a project's authoritative task summaries.
    pub fn insert_collection(&self, project: &ProjectId, tasks: Vec<TaskSummary>) {
        self.write()
            .collections
            .insert(project.clone(), Entry::fresh(tasks));
    }

    /// Returns a project's task summaries, or `None` when absent or stale.
    #[must_use]
    pub fn collection(&self, project: &ProjectId) -> Option<Vec<TaskSummary>> {
        let state = self.read();
        let entry = state.collections.get(project)?;
        if entry.stale {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Looks up a task's status in the cached collection.
    ///
    /// Resolves against the stored value even when the entry is stale: a
    /// drag gesture always lands on the board currently rendered, which is
    /// whatever the cache last held.
    #[must_use]
    pub fn task_status(&self, project: &ProjectId, task: &TaskId) -> Option<TaskStatus> {
        let state = self.read();
        let entry = state.collections.get(project)?;
        entry
            .value
            .iter()
            .find(|summary| summary.id() == task)
            .map(TaskSummary::status)
    }

    /// Stores a single task from a detail read.
    pub fn insert_task(&self, project: &ProjectId, task: Task) {
        self.write()
            .tasks
            .insert((project.clone(), task.id().clone()), Entry::fresh(task));
    }

    /// Returns a cached task, or `None` when absent or stale.
    #[must_use]
    pub fn task(&self, project: &ProjectId, task: &TaskId) -> Option<Task> {
        let state = self.read();
        let entry = state.tasks.get(&(project.clone(), task.clone()))?;
        if entry.stale {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Marks a project's collection entry stale.
    pub fn invalidate(&self, project: &ProjectId) {
        if let Some(entry) = self.write().collections.get_mut(project) {
            entry.stale = true;
        }
    }

    /// Marks a single-task entry stale.
    pub fn invalidate_task(&self, project: &ProjectId, task: &TaskId) {
        if let Some(entry) = self
            .write()
            .tasks
            .get_mut(&(project.clone(), task.clone()))
        {
            entry.stale = true;
        }
    }

    /// Applies an optimistic status write to the cached collection.
    ///
    /// Reports whether the task was present. The write deliberately lands
    /// before the remote confirms; the next authoritative refetch overwrites
    /// it either way. Single-task entries are left alone — the detail view
    /// is reconciled through invalidation, not through local guesses.
    pub fn apply_status(&self, project: &ProjectId, task: &TaskId, status: TaskStatus) -> bool {
        let mut state = self.write();
        let Some(entry) = state.collections.get_mut(project) else {
            return false;
        };
        entry
            .value
            .iter_mut()
            .find(|summary| summary.id() == task)
            .map(|summary| summary.set_status(status))
            .is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, CacheState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, CacheState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
