//! Wire payloads exchanged with the remote task endpoints.
//!
//! Each payload mirrors the JSON shape the remote actually sends and is
//! converted fallibly into domain types; conversion failure surfaces as a
//! validation error, never as a partially-trusted object.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::task::domain::{
    ActivityId, ActivityRecord, Note, NoteId, Task, TaskData, TaskDomainError, TaskId, TaskStatus,
    TaskSummary, UserId, UserRef,
};

/// User reference as embedded in activity records and notes.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct UserPayload {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    email: String,
}

impl TryFrom<UserPayload> for UserRef {
    type Error = TaskDomainError;

    fn try_from(payload: UserPayload) -> Result<Self, Self::Error> {
        Ok(Self::new(
            UserId::new(payload.id)?,
            payload.name,
            payload.email,
        ))
    }
}

/// One status-change record in the task's `completedBy` array.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ActivityPayload {
    #[serde(rename = "_id")]
    id: String,
    user: UserPayload,
    status: TaskStatus,
}

impl TryFrom<ActivityPayload> for ActivityRecord {
    type Error = TaskDomainError;

    fn try_from(payload: ActivityPayload) -> Result<Self, Self::Error> {
        Ok(Self::new(
            ActivityId::new(payload.id)?,
            payload.user.try_into()?,
            payload.status,
        ))
    }
}

/// One note in the task's `notes` array.
///
/// The remote echoes the parent task id; the domain note does not carry it,
/// but its presence is part of the validated shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct NotePayload {
    #[serde(rename = "_id")]
    id: String,
    content: String,
    created_by: UserPayload,
    #[serde(rename = "task")]
    _task: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<NotePayload> for Note {
    type Error = TaskDomainError;

    fn try_from(payload: NotePayload) -> Result<Self, Self::Error> {
        Ok(Self::new(
            NoteId::new(payload.id)?,
            payload.content,
            payload.created_by.try_into()?,
            payload.created_at,
            payload.updated_at,
        ))
    }
}

/// Full task shape returned by single-task reads and creation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct TaskPayload {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    description: String,
    status: TaskStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    completed_by: Vec<ActivityPayload>,
    notes: Vec<NotePayload>,
}

impl TryFrom<TaskPayload> for Task {
    type Error = TaskDomainError;

    fn try_from(payload: TaskPayload) -> Result<Self, Self::Error> {
        let activity = payload
            .completed_by
            .into_iter()
            .map(ActivityRecord::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let notes = payload
            .notes
            .into_iter()
            .map(Note::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_data(TaskData {
            id: TaskId::new(payload.id)?,
            name: payload.name,
            description: payload.description,
            status: payload.status,
            created_at: payload.created_at,
            updated_at: payload.updated_at,
            activity,
            notes,
        }))
    }
}

/// Reduced task shape embedded in a project read.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskSummaryPayload {
    #[serde(rename = "_id")]
    id: String,
    name: String,
    description: String,
    status: TaskStatus,
}

impl TryFrom<TaskSummaryPayload> for TaskSummary {
    type Error = TaskDomainError;

    fn try_from(payload: TaskSummaryPayload) -> Result<Self, Self::Error> {
        Ok(Self::new(
            TaskId::new(payload.id)?,
            payload.name,
            payload.description,
            payload.status,
        ))
    }
}

/// Project shape returned by `GET /projects/{id}`.
///
/// Only the embedded task summaries feed the engine; the rest of the
/// project record belongs to external collaborators but is part of the
/// validated shape.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ProjectPayload {
    #[serde(rename = "_id")]
    _id: String,
    #[serde(rename = "projectName")]
    _project_name: String,
    #[serde(rename = "clientName")]
    _client_name: String,
    #[serde(rename = "description")]
    _description: String,
    #[serde(rename = "manager")]
    _manager: ManagerPayload,
    pub(super) tasks: Vec<TaskSummaryPayload>,
    #[serde(rename = "team")]
    _team: Vec<String>,
}

/// Manager reference embedded in a project read.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ManagerPayload {
    #[serde(rename = "_id")]
    _id: String,
}

/// Envelope for task creation responses.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct CreatedTaskEnvelope {
    #[serde(rename = "message")]
    _message: String,
    pub(super) task: TaskPayload,
}

/// Envelope for single-task reads.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct TaskEnvelope {
    pub(super) task: TaskPayload,
}

/// Error body shape the remote uses for rejections.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ErrorEnvelope {
    pub(super) message: String,
}
