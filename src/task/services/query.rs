//! Read-only queries over the current task set.

use crate::task::{
    domain::{Task, TaskStatusKind},
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;

/// Read-only task query service.
///
/// Result order follows the repository; the in-memory adapter returns tasks
/// in identifier order.
#[derive(Clone)]
pub struct TaskQueryService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskQueryService<R>
where
    R: TaskRepository,
{
    /// Creates a new query service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns every task whose status has the given kind, ignoring payload.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the lookup fails.
    pub async fn tasks_by_status_kind(
        &self,
        kind: TaskStatusKind,
    ) -> TaskRepositoryResult<Vec<Task>> {
        self.repository.find_by_status_kind(kind).await
    }

    /// Returns every `High` or `Critical` task regardless of status.
    ///
    /// # Errors
    ///
    /// Returns a repository error when the lookup fails.
    pub async fn high_priority_tasks(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.repository.find_high_priority().await
    }
}
