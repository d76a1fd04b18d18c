//! Task aggregate root and its creation input.

use super::{TaskDomainError, TaskId, TaskPriority, TaskStatus, TransitionValidator};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Validated input for a task that has not been assigned an identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    title: String,
    description: String,
    priority: TaskPriority,
    created_at: DateTime<Utc>,
}

impl NewTask {
    /// Validates task fields and stamps the creation time.
    ///
    /// Only the title is validated; the description is free text.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: TaskPriority,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let owned_title = title.into();
        if owned_title.trim().is_empty() {
            return Err(TaskDomainError::EmptyTitle);
        }

        Ok(Self {
            title: owned_title,
            description: description.into(),
            priority,
            created_at: clock.utc(),
        })
    }

    /// Returns the validated title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }
}

/// Task aggregate root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    priority: TaskPriority,
    status: TaskStatus,
    revision: u64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Task {
    /// Materializes a stored task from validated input and its identifier.
    ///
    /// The task starts in [`TaskStatus::Todo`] at revision 0.
    #[must_use]
    pub fn from_new(id: TaskId, new_task: NewTask) -> Self {
        let NewTask {
            title,
            description,
            priority,
            created_at,
        } = new_task;

        Self {
            id,
            title,
            description,
            priority,
            status: TaskStatus::Todo,
            revision: 0,
            created_at,
            updated_at: created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the task priority.
    #[must_use]
    pub const fn priority(&self) -> TaskPriority {
        self.priority
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> &TaskStatus {
        &self.status
    }

    /// Returns the number of approved transitions applied so far.
    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest lifecycle timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the task to `requested` if the validator approves.
    ///
    /// On rejection the task is left exactly as it was.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidTransition`] or
    /// [`TaskDomainError::UserNotFound`] as decided by `validator`.
    pub fn transition_to(
        &mut self,
        requested: TaskStatus,
        validator: &TransitionValidator,
        clock: &impl Clock,
    ) -> Result<(), TaskDomainError> {
        validator.validate(&self.status, &requested)?;
        self.status = requested;
        self.revision = self.revision.saturating_add(1);
        self.touch(clock);
        Ok(())
    }

    /// Updates the `updated_at` timestamp to the current clock time.
    fn touch(&mut self, clock: &impl Clock) {
        self.updated_at = clock.utc();
    }
}
