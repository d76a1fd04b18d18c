//! Domain model for task lifecycle tracking.
//!
//! The task domain models creation, status transitions against a fixed
//! transition table, and daily report classification while keeping all
//! infrastructure concerns outside of the domain boundary.

mod error;
mod ids;
mod priority;
mod registry;
mod report;
mod status;
mod task;
mod transition;

pub use error::{ParseTaskPriorityError, ParseTaskStatusError, TaskDomainError};
pub use ids::{ActorName, TaskId};
pub use priority::TaskPriority;
pub use registry::UserRegistry;
pub use report::{DailyReport, ReportEntry};
pub use status::{TaskStatus, TaskStatusKind};
pub use task::{NewTask, Task};
pub use transition::{
    PayloadCheck, TRANSITION_RULES, TransitionRule, TransitionValidator, validate_transition,
};
