//! Unit tests for the task detail session.

use crate::board::adapters::RecordingNotifier;
use crate::board::services::{TransitionEngine, TransitionOutcome};
use crate::session::{DetailSession, SessionError, TaskSelection};
use crate::store::ProjectTaskCache;
use crate::task::adapters::memory::{InMemoryTaskRemote, RemoteCall};
use crate::task::domain::{ProjectId, TaskDraft, TaskId, TaskStatus, UserId, UserRef};
use crate::task::ports::TaskRemote;
use crate::task::services::TaskService;
use mockable::DefaultClock;
use rstest::rstest;
use std::sync::Arc;

type MemRemote = InMemoryTaskRemote<DefaultClock>;

fn hex_id(tag: u64) -> String {
    format!("{tag:024x}")
}

fn user(tag: u64) -> UserRef {
    let id = UserId::new(hex_id(tag)).expect("valid user id");
    UserRef::new(id, format!("User {tag}"), format!("user{tag}@example.com"))
}

struct Harness {
    remote: Arc<MemRemote>,
    cache: Arc<ProjectTaskCache>,
    notifier: Arc<RecordingNotifier>,
    session: DetailSession<MemRemote, RecordingNotifier>,
    project: ProjectId,
}

/// Session acting as `actor` against an authority whose requests are
/// authenticated as the same user.
async fn harness_for(actor: UserRef) -> (Harness, TaskId) {
    let remote = Arc::new(MemRemote::new(Arc::new(DefaultClock), actor.clone()));
    let project = ProjectId::new(hex_id(900)).expect("valid project id");
    remote.add_project(&project);
    let draft = TaskDraft::new("Open me", "Detail session target").expect("valid draft");
    let created = remote
        .create_task(&project, &draft)
        .await
        .expect("seeding create should succeed");

    let service = Arc::new(TaskService::new(Arc::clone(&remote)));
    let cache = Arc::new(ProjectTaskCache::new());
    let summaries = remote
        .project_tasks(&project)
        .await
        .expect("seeding read should succeed");
    cache.insert_collection(&project, summaries);

    let notifier = Arc::new(RecordingNotifier::new());
    let engine = Arc::new(TransitionEngine::new(
        Arc::clone(&service),
        Arc::clone(&cache),
        Arc::clone(&notifier),
    ));
    let session = DetailSession::new(
        project.clone(),
        actor,
        service,
        Arc::clone(&cache),
        engine,
        Arc::clone(&notifier),
    );
    (
        Harness {
            remote,
            cache,
            notifier,
            session,
            project,
        },
        created.id().clone(),
    )
}

fn get_task_calls(remote: &MemRemote) -> usize {
    remote
        .calls()
        .iter()
        .filter(|call| matches!(call, RemoteCall::GetTask(..)))
        .count()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_fetches_on_miss_and_reads_the_cache_afterwards() {
    let (harness, task_id) = harness_for(user(1)).await;
    let selection = TaskSelection::View(task_id.clone());

    let first = harness.session.open(&selection).await;
    assert!(first.is_some());
    assert_eq!(get_task_calls(&harness.remote), 1);

    let second = harness.session.open(&selection).await;
    assert!(second.is_some());
    assert_eq!(get_task_calls(&harness.remote), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn open_fails_closed_when_the_task_does_not_resolve() {
    let (harness, _) = harness_for(user(1)).await;
    let missing = TaskId::new(hex_id(404)).expect("valid task id");

    let opened = harness.session.open(&TaskSelection::View(missing)).await;

    assert!(opened.is_none());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn creation_selection_loads_nothing() {
    let (harness, _) = harness_for(user(1)).await;

    let opened = harness.session.open(&TaskSelection::Create).await;

    assert!(opened.is_none());
    assert_eq!(get_task_calls(&harness.remote), 0);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn status_change_rides_the_shared_transition_path() {
    let (harness, task_id) = harness_for(user(1)).await;
    let opened = harness
        .session
        .open(&TaskSelection::View(task_id.clone()))
        .await
        .expect("task should open");

    let outcome = harness
        .session
        .set_status(&opened, TaskStatus::UnderReview)
        .await
        .expect("transition should settle");

    assert!(matches!(outcome, TransitionOutcome::Committed { .. }));
    // Both the item entry and the project collection were invalidated: the
    // board must reflect the change too.
    assert!(harness.cache.task(&harness.project, &task_id).is_none());
    assert!(harness.cache.collection(&harness.project).is_none());
    assert_eq!(harness.notifier.success_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn same_status_selection_is_a_noop() {
    let (harness, task_id) = harness_for(user(1)).await;
    let opened = harness
        .session
        .open(&TaskSelection::View(task_id))
        .await
        .expect("task should open");
    let dispatches_before = harness.remote.status_dispatches();

    let outcome = harness
        .session
        .set_status(&opened, opened.status())
        .await
        .expect("no-op should settle");

    assert!(matches!(outcome, TransitionOutcome::NoChange));
    assert_eq!(harness.remote.status_dispatches(), dispatches_before);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn add_note_invalidates_only_the_item_entry() {
    let (harness, task_id) = harness_for(user(1)).await;
    let opened = harness
        .session
        .open(&TaskSelection::View(task_id.clone()))
        .await
        .expect("task should open");

    harness
        .session
        .add_note(opened.id(), "A fresh note")
        .await
        .expect("note creation should succeed");

    assert!(harness.cache.task(&harness.project, &task_id).is_none());
    // Notes never show on the board; the collection stays fresh.
    assert!(harness.cache.collection(&harness.project).is_some());
    assert_eq!(harness.notifier.success_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn empty_note_content_notifies_failure_and_propagates() {
    let (harness, task_id) = harness_for(user(1)).await;

    let result = harness.session.add_note(&task_id, "   ").await;

    assert!(matches!(result, Err(SessionError::Service(_))));
    assert_eq!(harness.notifier.error_count(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_note_is_author_gated_before_dispatch() {
    let author = user(1);
    let (harness, task_id) = harness_for(author).await;
    harness
        .session
        .add_note(&task_id, "Author's note")
        .await
        .expect("note creation should succeed");
    let opened = harness
        .session
        .open(&TaskSelection::View(task_id.clone()))
        .await
        .expect("task should open");
    let note_id = opened
        .notes()
        .first()
        .map(|note| note.id().clone())
        .expect("note should exist");

    // A different acting user sharing the same view of the task.
    let stranger_session = DetailSession::new(
        harness.project.clone(),
        user(2),
        Arc::new(TaskService::new(Arc::clone(&harness.remote))),
        Arc::clone(&harness.cache),
        Arc::new(TransitionEngine::new(
            Arc::new(TaskService::new(Arc::clone(&harness.remote))),
            Arc::clone(&harness.cache),
            Arc::clone(&harness.notifier),
        )),
        Arc::clone(&harness.notifier),
    );
    let calls_before = harness.remote.calls().len();
    let result = stranger_session.delete_note(&opened, &note_id).await;

    assert!(matches!(result, Err(SessionError::NotNoteAuthor)));
    assert_eq!(harness.remote.calls().len(), calls_before);

    // The author may delete, and only the item entry is invalidated.
    harness
        .session
        .delete_note(&opened, &note_id)
        .await
        .expect("author delete should succeed");
    assert!(harness.cache.task(&harness.project, &task_id).is_none());
    assert!(harness.cache.collection(&harness.project).is_some());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delete_note_rejects_ids_not_on_the_task() {
    let (harness, task_id) = harness_for(user(1)).await;
    let opened = harness
        .session
        .open(&TaskSelection::View(task_id))
        .await
        .expect("task should open");
    let unknown = crate::task::domain::NoteId::new(hex_id(555)).expect("valid note id");

    let result = harness.session.delete_note(&opened, &unknown).await;

    assert!(matches!(result, Err(SessionError::UnknownNote(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn timeline_reflects_each_transition_in_order() {
    let (harness, task_id) = harness_for(user(1)).await;

    for status in [
        TaskStatus::InProgress,
        TaskStatus::OnHold,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        harness
            .remote
            .set_status(&harness.project, &task_id, status)
            .await
            .expect("status change should succeed");
    }

    let opened = harness
        .session
        .open(&TaskSelection::View(task_id))
        .await
        .expect("task should open");
    let statuses: Vec<TaskStatus> = opened
        .timeline()
        .iter()
        .map(|record| record.status())
        .collect();
    assert_eq!(
        statuses,
        vec![
            TaskStatus::InProgress,
            TaskStatus::OnHold,
            TaskStatus::InProgress,
            TaskStatus::Completed,
        ]
    );
}
