//! Shared world state for task tracking BDD scenarios.

use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use tasktrack::task::{
    adapters::memory::InMemoryTaskRepository,
    domain::{DailyReport, Task, UserRegistry},
    services::{TaskLifecycleError, TaskLifecycleService, TaskReportingService},
};

/// Lifecycle service type used by the BDD world.
pub type TestLifecycleService = TaskLifecycleService<InMemoryTaskRepository, DefaultClock>;

/// Services assembled once the scenario names its registry.
pub struct TrackerServices {
    pub lifecycle: TestLifecycleService,
    pub reports: TaskReportingService<InMemoryTaskRepository>,
}

impl TrackerServices {
    /// Builds services over a fresh store with the given registry.
    pub fn new(registry: UserRegistry) -> Self {
        let repository = Arc::new(InMemoryTaskRepository::new());
        Self {
            lifecycle: TaskLifecycleService::new(
                Arc::clone(&repository),
                Arc::new(registry),
                Arc::new(DefaultClock),
            ),
            reports: TaskReportingService::new(repository),
        }
    }
}

/// Scenario world for task tracking behaviour tests.
#[derive(Default)]
pub struct TaskTrackingWorld {
    pub services: Option<TrackerServices>,
    pub last_task: Option<Task>,
    pub last_transition_result: Option<Result<Task, TaskLifecycleError>>,
    pub last_report: Option<DailyReport>,
}

impl TaskTrackingWorld {
    /// Returns the assembled services.
    pub fn services(&self) -> Result<&TrackerServices, eyre::Report> {
        self.services
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing tracker in scenario world"))
    }

    /// Returns the most recently created or transitioned task.
    pub fn last_task(&self) -> Result<&Task, eyre::Report> {
        self.last_task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> TaskTrackingWorld {
    TaskTrackingWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
