//! Service layer for task creation, lookup, and status transitions.

use crate::task::{
    domain::{
        NewTask, ParseTaskStatusError, Task, TaskDomainError, TaskId, TaskPriority, TaskStatus,
        TaskStatusKind, TransitionValidator, UserRegistry,
    },
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: String,
    priority: TaskPriority,
}

impl CreateTaskRequest {
    /// Creates a request with an empty description.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: TaskPriority) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            priority,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Request payload for a text-driven status transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTaskRequest {
    task_id: TaskId,
    target_status: String,
    detail: Option<String>,
}

impl TransitionTaskRequest {
    /// Creates a transition request for the target status kind name.
    #[must_use]
    pub fn new(task_id: TaskId, target_status: impl Into<String>) -> Self {
        Self {
            task_id,
            target_status: target_status.into(),
            detail: None,
        }
    }

    /// Sets the status payload: the actor for `in_progress` and
    /// `completed`, or the reason for `cancelled`.
    #[must_use]
    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

/// Service-level errors for task lifecycle operations.
#[derive(Debug, Error)]
pub enum TaskLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task exists with the given identifier.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The requested status name is not a known status kind.
    #[error(transparent)]
    InvalidStatus(#[from] ParseTaskStatusError),
}

/// Result type for task lifecycle service operations.
pub type TaskLifecycleResult<T> = Result<T, TaskLifecycleError>;

/// Task creation and transition orchestration service.
///
/// This is the only writer of task identity and status.
#[derive(Clone)]
pub struct TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    validator: TransitionValidator,
    clock: Arc<C>,
}

impl<R, C> TaskLifecycleService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(repository: Arc<R>, registry: Arc<UserRegistry>, clock: Arc<C>) -> Self {
        Self {
            repository,
            validator: TransitionValidator::new(registry),
            clock,
        }
    }

    /// Returns the validator used for status transitions.
    #[must_use]
    pub const fn validator(&self) -> &TransitionValidator {
        &self.validator
    }

    /// Creates a task in the `Todo` status.
    ///
    /// No identifier is consumed when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::EmptyTitle`] when the title is blank, or
    /// [`TaskLifecycleError::Repository`] when storage fails.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskLifecycleResult<Task> {
        let CreateTaskRequest {
            title,
            description,
            priority,
        } = request;

        let new_task = NewTask::new(title, description, priority, &*self.clock)?;
        let task = self.repository.insert(new_task).await?;
        debug!(task_id = %task.id(), priority = %task.priority(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] when no task has the
    /// identifier, or [`TaskLifecycleError::Repository`] when lookup fails.
    pub async fn get(&self, task_id: TaskId) -> TaskLifecycleResult<Task> {
        let found = self.repository.find_by_id(task_id).await?;
        debug!(%task_id, found = found.is_some(), "task lookup");
        found.ok_or(TaskLifecycleError::TaskNotFound(task_id))
    }

    /// Replaces the task status when the transition table allows it.
    ///
    /// The stored task is untouched when any check fails.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::TaskNotFound`] for unknown tasks,
    /// [`TaskLifecycleError::Domain`] with the validator's rejection, or
    /// [`TaskLifecycleError::Repository`] when the write fails or races with
    /// another update.
    pub async fn update_status(
        &self,
        task_id: TaskId,
        requested: TaskStatus,
    ) -> TaskLifecycleResult<Task> {
        let mut task = self.get(task_id).await?;
        let from = task.status().kind();
        let to = requested.kind();

        if let Err(err) = task.transition_to(requested, &self.validator, &*self.clock) {
            warn!(%task_id, %from, %to, error = %err, "status transition rejected");
            return Err(err.into());
        }

        self.repository.update(&task).await?;
        info!(%task_id, %from, %to, revision = task.revision(), "status transition applied");
        Ok(task)
    }

    /// Parses a textual transition request and applies it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::InvalidStatus`] when the target name is
    /// unknown, [`TaskLifecycleError::Domain`] with
    /// [`TaskDomainError::MissingStatusPayload`] when a required detail is
    /// absent, and otherwise the errors of [`Self::update_status`].
    pub async fn transition_task(
        &self,
        request: TransitionTaskRequest,
    ) -> TaskLifecycleResult<Task> {
        let TransitionTaskRequest {
            task_id,
            target_status,
            detail,
        } = request;

        let kind = TaskStatusKind::try_from(target_status.as_str())?;
        let requested = TaskStatus::from_parts(kind, detail)?;
        self.update_status(task_id, requested).await
    }

    /// Returns the number of tasks in the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskLifecycleError::Repository`] when the count fails.
    pub async fn task_count(&self) -> TaskLifecycleResult<usize> {
        Ok(self.repository.count().await?)
    }
}
