//! Error types for task domain validation and parsing.

use super::{ActorName, TaskStatusKind};
use thiserror::Error;

/// Errors returned while constructing or transitioning domain task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// A transition payload named an actor outside the user registry.
    #[error("user not found: {0}")]
    UserNotFound(ActorName),

    /// The requested status change is not in the transition table.
    #[error("invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// Status kind the task currently has.
        from: TaskStatusKind,
        /// Status kind that was requested.
        to: TaskStatusKind,
    },

    /// A payload-bearing status was requested without its payload.
    #[error("status {0} requires a payload")]
    MissingStatusPayload(TaskStatusKind),
}

/// Error returned while parsing task status kinds from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing task priorities from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task priority: {0}")]
pub struct ParseTaskPriorityError(pub String);
