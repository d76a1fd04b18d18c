//! Daily report classification over a task snapshot.

use super::{ActorName, Task, TaskId, TaskPriority, TaskStatus};
use std::fmt;

/// A task that matched one of the report's classification rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEntry {
    /// A critical task that has not been started.
    Urgent {
        /// Task identifier.
        id: TaskId,
        /// Task title.
        title: String,
    },
    /// A high-priority task that is underway.
    HighPriorityInProgress {
        /// Task identifier.
        id: TaskId,
        /// Task title.
        title: String,
        /// Actor working on the task.
        assigned_to: ActorName,
    },
    /// A finished task of any priority.
    Completed {
        /// Task identifier.
        id: TaskId,
        /// Task title.
        title: String,
        /// Actor that finished the task.
        completed_by: ActorName,
    },
}

impl ReportEntry {
    /// Classifies a task by `(status kind, priority)`.
    ///
    /// Returns `None` for combinations the report does not cover. At most
    /// one rule can match a given task.
    #[must_use]
    pub fn classify(task: &Task) -> Option<Self> {
        let id = task.id();
        let title = task.title().to_owned();
        match (task.status(), task.priority()) {
            (TaskStatus::Todo, TaskPriority::Critical) => Some(Self::Urgent { id, title }),
            (TaskStatus::InProgress { assigned_to }, TaskPriority::High) => {
                Some(Self::HighPriorityInProgress {
                    id,
                    title,
                    assigned_to: assigned_to.clone(),
                })
            }
            (TaskStatus::Completed { completed_by }, _) => Some(Self::Completed {
                id,
                title,
                completed_by: completed_by.clone(),
            }),
            _ => None,
        }
    }

    /// Returns the identifier of the classified task.
    #[must_use]
    pub const fn task_id(&self) -> TaskId {
        match self {
            Self::Urgent { id, .. }
            | Self::HighPriorityInProgress { id, .. }
            | Self::Completed { id, .. } => *id,
        }
    }
}

impl fmt::Display for ReportEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Urgent { id, title } => {
                write!(f, "URGENT: task #{id} '{title}' is critical and not started")
            }
            Self::HighPriorityInProgress {
                title, assigned_to, ..
            } => write!(f, "In progress: '{title}' is assigned to {assigned_to}"),
            Self::Completed {
                title,
                completed_by,
                ..
            } => write!(f, "Completed: '{title}' by {completed_by}"),
        }
    }
}

/// Result of one reporting pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DailyReport {
    entries: Vec<ReportEntry>,
}

impl DailyReport {
    /// Runs the classification pass, visiting every task once.
    #[must_use]
    pub fn from_tasks<'a>(tasks: impl IntoIterator<Item = &'a Task>) -> Self {
        Self {
            entries: tasks.into_iter().filter_map(ReportEntry::classify).collect(),
        }
    }

    /// Returns the matched entries in visiting order.
    #[must_use]
    pub fn entries(&self) -> &[ReportEntry] {
        &self.entries
    }

    /// Returns how many tasks matched a classification rule.
    #[must_use]
    pub fn processed_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the closing summary line.
    #[must_use]
    pub fn summary(&self) -> String {
        match self.processed_count() {
            0 => "No tasks required attention today.".to_owned(),
            1 => "Processed 1 task.".to_owned(),
            count => format!("Processed {count} tasks."),
        }
    }

    /// Renders entry lines followed by the summary, one per line.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for DailyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(f, "{entry}")?;
        }
        f.write_str(&self.summary())
    }
}
