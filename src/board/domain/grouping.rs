//! Derived per-status grouping of a project's task collection.

use crate::task::domain::{TaskStatus, TaskSummary};

/// The Kanban board: one bucket per workflow status.
///
/// Derived, never persisted; rebuilt from the task collection on demand.
/// All five buckets exist even when empty, so the board always renders
/// every column, and tasks keep the order they hold in the source
/// collection — there is no per-bucket priority.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pending: Vec<TaskSummary>,
    in_progress: Vec<TaskSummary>,
    under_review: Vec<TaskSummary>,
    on_hold: Vec<TaskSummary>,
    completed: Vec<TaskSummary>,
}

impl Board {
    /// Partitions a task collection into status buckets.
    ///
    /// Deterministic and pure: every task lands in exactly the bucket of its
    /// current status.
    #[must_use]
    pub fn group(tasks: &[TaskSummary]) -> Self {
        let mut board = Self::default();
        for task in tasks {
            board.column_mut(task.status()).push(task.clone());
        }
        board
    }

    /// Returns the bucket for a status.
    #[must_use]
    pub fn column(&self, status: TaskStatus) -> &[TaskSummary] {
        match status {
            TaskStatus::Pending => &self.pending,
            TaskStatus::InProgress => &self.in_progress,
            TaskStatus::UnderReview => &self.under_review,
            TaskStatus::OnHold => &self.on_hold,
            TaskStatus::Completed => &self.completed,
        }
    }

    /// Returns all buckets in canonical display order.
    #[must_use]
    pub fn columns(&self) -> [(TaskStatus, &[TaskSummary]); 5] {
        [
            (TaskStatus::Pending, self.pending.as_slice()),
            (TaskStatus::InProgress, self.in_progress.as_slice()),
            (TaskStatus::UnderReview, self.under_review.as_slice()),
            (TaskStatus::OnHold, self.on_hold.as_slice()),
            (TaskStatus::Completed, self.completed.as_slice()),
        ]
    }

    /// Returns the total number of tasks on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns().iter().map(|(_, tasks)| tasks.len()).sum()
    }

    /// Reports whether the board holds no tasks at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn column_mut(&mut self, status: TaskStatus) -> &mut Vec<TaskSummary> {
        match status {
            TaskStatus::Pending => &mut self.pending,
            TaskStatus::InProgress => &mut self.in_progress,
            TaskStatus::UnderReview => &mut self.under_review,
            TaskStatus::OnHold => &mut self.on_hold,
            TaskStatus::Completed => &mut self.completed,
        }
    }
}
