//! Repository port for task storage, identifier allocation, and lookup.

use crate::task::domain::{NewTask, Task, TaskId, TaskStatusKind};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task storage contract.
///
/// Implementations own the identifier counter. Each `insert` and `update`
/// must be atomic with respect to readers.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Allocates the next identifier and stores the task under it.
    ///
    /// Identifiers start at [`TaskId::FIRST`] and are never reused.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] when storage fails.
    async fn insert(&self, new_task: NewTask) -> TaskRepositoryResult<Task>;

    /// Replaces a stored task with a newer revision of itself.
    ///
    /// The write succeeds only when `task.revision()` is exactly one past
    /// the stored revision.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::NotFound`] when the task does not exist
    /// or [`TaskRepositoryError::Conflict`] when the stored revision moved.
    async fn update(&self, task: &Task) -> TaskRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Returns every task whose status has the given kind.
    async fn find_by_status_kind(&self, kind: TaskStatusKind) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns every task with `High` or `Critical` priority.
    async fn find_high_priority(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns a consistent snapshot of all tasks.
    async fn snapshot(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Returns the number of stored tasks.
    async fn count(&self) -> TaskRepositoryResult<usize>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// The task was not found.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// The task changed since it was read.
    #[error("concurrent update conflict for task {0}")]
    Conflict(TaskId),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
