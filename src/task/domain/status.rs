//! Task status and its payload-free kind.

use super::{ActorName, ParseTaskStatusError, TaskDomainError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Status tag without payload, used for transition lookup and queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatusKind {
    /// Work has not started.
    Todo,
    /// Work is assigned and underway.
    InProgress,
    /// Work has finished.
    Completed,
    /// Work was dropped.
    Cancelled,
}

impl TaskStatusKind {
    /// Every status kind, in lifecycle order.
    pub const ALL: [Self; 4] = [
        Self::Todo,
        Self::InProgress,
        Self::Completed,
        Self::Cancelled,
    ];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for TaskStatusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatusKind {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}

/// Task lifecycle status with the payload each variant carries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Todo,
    /// Work is underway.
    InProgress {
        /// Actor the task is assigned to.
        assigned_to: ActorName,
    },
    /// Work has finished.
    Completed {
        /// Actor that completed the task.
        completed_by: ActorName,
    },
    /// Work was dropped.
    Cancelled {
        /// Why the task was dropped.
        reason: String,
    },
}

impl TaskStatus {
    /// Creates an in-progress status assigned to `actor`.
    #[must_use]
    pub fn in_progress(actor: impl Into<ActorName>) -> Self {
        Self::InProgress {
            assigned_to: actor.into(),
        }
    }

    /// Creates a completed status attributed to `actor`.
    #[must_use]
    pub fn completed(actor: impl Into<ActorName>) -> Self {
        Self::Completed {
            completed_by: actor.into(),
        }
    }

    /// Creates a cancelled status with the given reason.
    #[must_use]
    pub fn cancelled(reason: impl Into<String>) -> Self {
        Self::Cancelled {
            reason: reason.into(),
        }
    }

    /// Builds a status from its kind and an optional payload value.
    ///
    /// The payload is the assignee for `InProgress`, the completing actor
    /// for `Completed`, and the reason for `Cancelled`. It is ignored for
    /// `Todo`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::MissingStatusPayload`] when `kind` carries
    /// a payload and `detail` is `None`.
    pub fn from_parts(
        kind: TaskStatusKind,
        detail: Option<String>,
    ) -> Result<Self, TaskDomainError> {
        match (kind, detail) {
            (TaskStatusKind::Todo, _) => Ok(Self::Todo),
            (TaskStatusKind::InProgress, Some(actor)) => Ok(Self::in_progress(actor)),
            (TaskStatusKind::Completed, Some(actor)) => Ok(Self::completed(actor)),
            (TaskStatusKind::Cancelled, Some(reason)) => Ok(Self::cancelled(reason)),
            (missing, None) => Err(TaskDomainError::MissingStatusPayload(missing)),
        }
    }

    /// Returns the payload-free status kind.
    #[must_use]
    pub const fn kind(&self) -> TaskStatusKind {
        match self {
            Self::Todo => TaskStatusKind::Todo,
            Self::InProgress { .. } => TaskStatusKind::InProgress,
            Self::Completed { .. } => TaskStatusKind::Completed,
            Self::Cancelled { .. } => TaskStatusKind::Cancelled,
        }
    }

    /// Returns the assignee when the status is in progress.
    #[must_use]
    pub const fn assignee(&self) -> Option<&ActorName> {
        match self {
            Self::InProgress { assigned_to } => Some(assigned_to),
            Self::Todo | Self::Completed { .. } | Self::Cancelled { .. } => None,
        }
    }

    /// Returns the completing actor when the status is completed.
    #[must_use]
    pub const fn completer(&self) -> Option<&ActorName> {
        match self {
            Self::Completed { completed_by } => Some(completed_by),
            Self::Todo | Self::InProgress { .. } | Self::Cancelled { .. } => None,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Todo => f.write_str("todo"),
            Self::InProgress { assigned_to } => write!(f, "in_progress ({assigned_to})"),
            Self::Completed { completed_by } => write!(f, "completed ({completed_by})"),
            Self::Cancelled { reason } => write!(f, "cancelled ({reason})"),
        }
    }
}
