//! Status transition table and the validator that consults it.
//!
//! Every legal `(from, to)` pair lives in [`TRANSITION_RULES`]. Pairs that
//! are absent, including same-state requests and anything leaving
//! `Completed` or `Cancelled`, are rejected with
//! [`TaskDomainError::InvalidTransition`].

use super::{TaskDomainError, TaskStatus, TaskStatusKind, UserRegistry};
use std::sync::Arc;

/// Extra check applied to the requested status once a rule matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadCheck {
    /// The rule allows the transition unconditionally.
    None,
    /// The requested assignee must be a registered actor.
    AssigneeRegistered,
}

impl PayloadCheck {
    fn apply(self, requested: &TaskStatus, registry: &UserRegistry) -> Result<(), TaskDomainError> {
        match self {
            Self::None => Ok(()),
            Self::AssigneeRegistered => match requested.assignee() {
                Some(name) if !registry.contains(name) => {
                    Err(TaskDomainError::UserNotFound(name.clone()))
                }
                Some(_) | None => Ok(()),
            },
        }
    }
}

/// One row of the transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionRule {
    /// Current status kind.
    pub from: TaskStatusKind,
    /// Requested status kind.
    pub to: TaskStatusKind,
    /// Payload check run when the pair matches.
    pub check: PayloadCheck,
}

/// The complete set of legal status transitions.
// `Completed` does not re-check the registry; only assignment does.
pub const TRANSITION_RULES: &[TransitionRule] = &[
    TransitionRule {
        from: TaskStatusKind::Todo,
        to: TaskStatusKind::InProgress,
        check: PayloadCheck::AssigneeRegistered,
    },
    TransitionRule {
        from: TaskStatusKind::InProgress,
        to: TaskStatusKind::Completed,
        check: PayloadCheck::None,
    },
    TransitionRule {
        from: TaskStatusKind::Todo,
        to: TaskStatusKind::Cancelled,
        check: PayloadCheck::None,
    },
    TransitionRule {
        from: TaskStatusKind::InProgress,
        to: TaskStatusKind::Cancelled,
        check: PayloadCheck::None,
    },
];

fn find_rule(from: TaskStatusKind, to: TaskStatusKind) -> Option<&'static TransitionRule> {
    TRANSITION_RULES
        .iter()
        .find(|rule| rule.from == from && rule.to == to)
}

impl TaskStatusKind {
    /// Returns `true` when the table has a rule for `self -> target`.
    ///
    /// Payload checks are not considered.
    #[must_use]
    pub fn can_transition_to(self, target: Self) -> bool {
        find_rule(self, target).is_some()
    }

    /// Returns `true` when no transition leaves this kind.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !TRANSITION_RULES.iter().any(|rule| rule.from == self)
    }
}

/// Decides whether `current -> requested` is legal.
///
/// The result depends only on the three arguments.
///
/// # Errors
///
/// Returns [`TaskDomainError::InvalidTransition`] when the kind pair has no
/// rule, or [`TaskDomainError::UserNotFound`] when an assignment names an
/// actor outside `registry`.
pub fn validate_transition(
    current: &TaskStatus,
    requested: &TaskStatus,
    registry: &UserRegistry,
) -> Result<(), TaskDomainError> {
    let from = current.kind();
    let to = requested.kind();
    let rule = find_rule(from, to).ok_or(TaskDomainError::InvalidTransition { from, to })?;
    rule.check.apply(requested, registry)
}

/// Transition validator bound to a user registry.
#[derive(Debug, Clone)]
pub struct TransitionValidator {
    registry: Arc<UserRegistry>,
}

impl TransitionValidator {
    /// Creates a validator that checks assignees against `registry`.
    #[must_use]
    pub const fn new(registry: Arc<UserRegistry>) -> Self {
        Self { registry }
    }

    /// Returns the registry the validator consults.
    #[must_use]
    pub fn registry(&self) -> &UserRegistry {
        &self.registry
    }

    /// Validates `current -> requested` against the transition table.
    ///
    /// # Errors
    ///
    /// See [`validate_transition`].
    pub fn validate(
        &self,
        current: &TaskStatus,
        requested: &TaskStatus,
    ) -> Result<(), TaskDomainError> {
        validate_transition(current, requested, &self.registry)
    }
}
