//! Shared world state for board transition BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use taskboard::board::adapters::RecordingNotifier;
use taskboard::board::domain::ManagerRef;
use taskboard::board::services::{
    BoardContext, BoardController, BoardError, DragOutcome, TransitionEngine,
};
use taskboard::store::ProjectTaskCache;
use taskboard::task::adapters::memory::InMemoryTaskRemote;
use taskboard::task::domain::{ProjectId, TaskId, UserId, UserRef};
use taskboard::task::services::TaskService;

/// Remote type used by the BDD world.
pub type TestRemote = InMemoryTaskRemote<DefaultClock>;

/// Controller type used by the BDD world.
pub type TestController = BoardController<TestRemote, RecordingNotifier>;

/// Scenario world for board transition behaviour tests.
pub struct BoardWorld {
    pub remote: Arc<TestRemote>,
    pub cache: Arc<ProjectTaskCache>,
    pub notifier: Arc<RecordingNotifier>,
    pub manager_controller: TestController,
    pub collaborator_controller: TestController,
    pub project: ProjectId,
    pub task: Option<TaskId>,
    pub dispatches_after_setup: usize,
    pub last_result: Option<Result<DragOutcome, BoardError>>,
}

fn hex_id(tag: u64) -> String {
    format!("{tag:024x}")
}

/// Builds a user reference for the scenario cast.
#[must_use]
pub fn cast_user(tag: u64) -> UserRef {
    let id = UserId::new(hex_id(tag)).expect("valid user id");
    UserRef::new(id, format!("User {tag}"), format!("user{tag}@example.com"))
}

impl BoardWorld {
    /// Creates a world with one project, a manager, and a collaborator
    /// sharing the same cache, engine, and notifier.
    #[must_use]
    pub fn new() -> Self {
        let manager = cast_user(1);
        let collaborator = cast_user(2);
        let project = ProjectId::new(hex_id(900)).expect("valid project id");

        let remote = Arc::new(TestRemote::new(Arc::new(DefaultClock), manager.clone()));
        remote.add_project(&project);

        let service = Arc::new(TaskService::new(Arc::clone(&remote)));
        let cache = Arc::new(ProjectTaskCache::new());
        let notifier = Arc::new(RecordingNotifier::new());
        let engine = Arc::new(TransitionEngine::new(
            Arc::clone(&service),
            Arc::clone(&cache),
            Arc::clone(&notifier),
        ));

        let manager_controller = BoardController::new(
            BoardContext {
                project: project.clone(),
                manager: ManagerRef::new(manager.id().clone()),
                actor: manager.clone(),
            },
            Arc::clone(&service),
            Arc::clone(&cache),
            Arc::clone(&engine),
            Arc::clone(&notifier),
        );
        let collaborator_controller = BoardController::new(
            BoardContext {
                project: project.clone(),
                manager: ManagerRef::new(manager.id().clone()),
                actor: collaborator,
            },
            service,
            Arc::clone(&cache),
            engine,
            Arc::clone(&notifier),
        );

        Self {
            remote,
            cache,
            notifier,
            manager_controller,
            collaborator_controller,
            project,
            task: None,
            dispatches_after_setup: 0,
            last_result: None,
        }
    }

    /// Returns the seeded task id.
    pub fn seeded_task(&self) -> Result<&TaskId, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing seeded task in scenario world"))
    }
}

impl Default for BoardWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> BoardWorld {
    BoardWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
