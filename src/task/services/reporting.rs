//! Daily report generation.

use crate::task::{
    domain::DailyReport,
    ports::{TaskRepository, TaskRepositoryResult},
};
use std::sync::Arc;
use tracing::debug;

/// Produces operational summaries without touching the store.
#[derive(Clone)]
pub struct TaskReportingService<R>
where
    R: TaskRepository,
{
    repository: Arc<R>,
}

impl<R> TaskReportingService<R>
where
    R: TaskRepository,
{
    /// Creates a new reporting service.
    #[must_use]
    pub const fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Classifies every task in one pass over a store snapshot.
    ///
    /// An empty store yields a report with no entries.
    ///
    /// # Errors
    ///
    /// Returns a repository error only when the snapshot cannot be taken;
    /// classification itself never fails.
    pub async fn process_daily_report(&self) -> TaskRepositoryResult<DailyReport> {
        let tasks = self.repository.snapshot().await?;
        let report = DailyReport::from_tasks(&tasks);
        debug!(
            scanned = tasks.len(),
            processed = report.processed_count(),
            "daily report generated"
        );
        Ok(report)
    }
}
