//! Application services for task lifecycle orchestration.

mod lifecycle;
mod query;
mod reporting;

pub use lifecycle::{
    CreateTaskRequest, TaskLifecycleError, TaskLifecycleResult, TaskLifecycleService,
    TransitionTaskRequest,
};
pub use query::TaskQueryService;
pub use reporting::TaskReportingService;
