//! HTTP adapter for the remote task endpoints.

mod payloads;


use async_trait::async_trait;
use reqwest::{Response, StatusCode};
use serde_json::json;

use crate::task::{
    domain::{
        NoteDraft, NoteId, ProjectId, Task, TaskDomainError, TaskDraft, TaskId, TaskStatus,
        TaskSummary,
    },
    ports::{TaskRemote, TaskRemoteError, TaskRemoteResult},
};
use payloads::{CreatedTaskEnvelope, ErrorEnvelope, ProjectPayload, TaskEnvelope};

/// [`TaskRemote`] implementation over the REST task endpoints.
///
/// Authentication headers are the transport's concern: callers supply a
/// pre-configured [`reqwest::Client`] (bearer middleware, timeouts) via
/// [`HttpTaskRemote::with_client`] when the default is not enough.
#[derive(Debug, Clone)]
pub struct HttpTaskRemote {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTaskRemote {
    /// Creates an adapter with a default client.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    /// Creates an adapter with a caller-configured client.
    #[must_use]
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let mut trimmed = base_url.into();
        while trimmed.ends_with('/') {
            trimmed.pop();
        }
        Self {
            client,
            base_url: trimmed,
        }
    }

    fn task_collection_url(&self, project: &ProjectId) -> String {
        format!("{}/projects/{project}/tasks", self.base_url)
    }

    fn task_url(&self, project: &ProjectId, task: &TaskId) -> String {
        format!("{}/{task}", self.task_collection_url(project))
    }

    fn project_url(&self, project: &ProjectId) -> String {
        format!("{}/projects/{project}", self.base_url)
    }
}

/// Maps a non-success response onto the remote error taxonomy, preferring
/// the remote's own message where the body carries one.
async fn reject(response: Response) -> TaskRemoteError {
    let status = response.status();
    let message = response
        .json::<ErrorEnvelope>()
        .await
        .map(|envelope| envelope.message)
        .unwrap_or_else(|_| status.to_string());
    match status {
        StatusCode::NOT_FOUND => TaskRemoteError::NotFound,
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => TaskRemoteError::Unauthorized,
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY | StatusCode::CONFLICT => {
            TaskRemoteError::Validation(message)
        }
        _ => TaskRemoteError::Transport(std::sync::Arc::new(std::io::Error::other(message))),
    }
}

/// Resolves a response, mapping send failures to transport errors.
async fn ensure_ok(
    outcome: Result<Response, reqwest::Error>,
) -> TaskRemoteResult<Response> {
    let response = outcome.map_err(TaskRemoteError::transport)?;
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(reject(response).await)
    }
}

/// Converts a domain rejection of remote data into a validation error.
fn invalid(err: TaskDomainError) -> TaskRemoteError {
    TaskRemoteError::Validation(err.to_string())
}

/// Deserializes and schema-validates a response body into `T`'s payload.
async fn read_json<T>(response: Response) -> TaskRemoteResult<T>
where
    T: serde::de::DeserializeOwned,
{
    response
        .json::<T>()
        .await
        .map_err(|err| TaskRemoteError::Validation(err.to_string()))
}

#[async_trait]
impl TaskRemote for HttpTaskRemote {
    async fn create_task(&self, project: &ProjectId, draft: &TaskDraft) -> TaskRemoteResult<Task> {
        let outcome = self
            .client
            .post(self.task_collection_url(project))
            .json(draft)
            .send()
            .await;
        let response = ensure_ok(outcome).await?;
        let envelope = read_json::<CreatedTaskEnvelope>(response).await?;
        envelope.task.try_into().map_err(invalid)
    }

    async fn task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<Task> {
        let outcome = self.client.get(self.task_url(project, task)).send().await;
        let response = ensure_ok(outcome).await?;
        let envelope = read_json::<TaskEnvelope>(response).await?;
        envelope.task.try_into().map_err(invalid)
    }

    async fn update_task(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &TaskDraft,
    ) -> TaskRemoteResult<()> {
        let outcome = self
            .client
            .put(self.task_url(project, task))
            .json(draft)
            .send()
            .await;
        ensure_ok(outcome).await.map(|_| ())
    }

    async fn delete_task(&self, project: &ProjectId, task: &TaskId) -> TaskRemoteResult<()> {
        let outcome = self
            .client
            .delete(self.task_url(project, task))
            .send()
            .await;
        ensure_ok(outcome).await.map(|_| ())
    }

    async fn set_status(
        &self,
        project: &ProjectId,
        task: &TaskId,
        status: TaskStatus,
    ) -> TaskRemoteResult<()> {
        let outcome = self
            .client
            .post(format!("{}/status", self.task_url(project, task)))
            .json(&json!({ "status": status }))
            .send()
            .await;
        ensure_ok(outcome).await.map(|_| ())
    }

    async fn project_tasks(&self, project: &ProjectId) -> TaskRemoteResult<Vec<TaskSummary>> {
        let outcome = self.client.get(self.project_url(project)).send().await;
        let response = ensure_ok(outcome).await?;
        let payload = read_json::<ProjectPayload>(response).await?;
        payload
            .tasks
            .into_iter()
            .map(|summary| summary.try_into().map_err(invalid))
            .collect()
    }

    async fn create_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        draft: &NoteDraft,
    ) -> TaskRemoteResult<()> {
        let outcome = self
            .client
            .post(format!("{}/notes", self.task_url(project, task)))
            .json(draft)
            .send()
            .await;
        ensure_ok(outcome).await.map(|_| ())
    }

    async fn delete_note(
        &self,
        project: &ProjectId,
        task: &TaskId,
        note: &NoteId,
    ) -> TaskRemoteResult<()> {
        let outcome = self
            .client
            .delete(format!("{}/notes/{note}", self.task_url(project, task)))
            .send()
            .await;
        ensure_ok(outcome).await.map(|_| ())
    }
}
