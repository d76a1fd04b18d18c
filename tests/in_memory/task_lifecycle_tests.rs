//! In-memory integration tests for task lifecycle operations.

use super::helpers::{Tracker, tracker};
use rstest::rstest;
use tasktrack::task::{
    domain::{ReportEntry, TaskDomainError, TaskId, TaskPriority, TaskStatus, TaskStatusKind},
    services::{CreateTaskRequest, TaskLifecycleError},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn daily_report_after_assign_and_complete(tracker: Tracker) -> Result<(), eyre::Report> {
    let fix = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Fix bug", TaskPriority::Critical).with_description("..."))
        .await?;
    let docs = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Docs", TaskPriority::Medium).with_description("..."))
        .await?;
    eyre::ensure!(fix.id() == TaskId::new(1), "first id should be 1");
    eyre::ensure!(docs.id() == TaskId::new(2), "second id should be 2");

    tracker
        .lifecycle
        .update_status(fix.id(), TaskStatus::in_progress("Alice"))
        .await?;
    tracker
        .lifecycle
        .update_status(docs.id(), TaskStatus::in_progress("Bob"))
        .await?;
    tracker
        .lifecycle
        .update_status(docs.id(), TaskStatus::completed("Bob"))
        .await?;

    let report = tracker.reports.process_daily_report().await?;

    eyre::ensure!(
        report.processed_count() == 1,
        "expected one processed task, found {}",
        report.processed_count()
    );
    let [ReportEntry::Completed { id, completed_by, .. }] = report.entries() else {
        eyre::bail!("expected a single completed entry, got {:?}", report.entries());
    };
    eyre::ensure!(*id == docs.id(), "completed entry should be task 2");
    eyre::ensure!(completed_by.as_str() == "Bob", "completer should be Bob");
    eyre::ensure!(report.render().ends_with("Processed 1 task."));
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn rejected_transition_keeps_status_visible_to_queries(
    tracker: Tracker,
) -> Result<(), eyre::Report> {
    let task = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Ship release", TaskPriority::High))
        .await?;

    let result = tracker
        .lifecycle
        .update_status(task.id(), TaskStatus::completed("Alice"))
        .await;
    eyre::ensure!(
        matches!(
            result,
            Err(TaskLifecycleError::Domain(TaskDomainError::InvalidTransition {
                from: TaskStatusKind::Todo,
                to: TaskStatusKind::Completed,
            }))
        ),
        "expected InvalidTransition, got {result:?}"
    );

    let todo = tracker
        .queries
        .tasks_by_status_kind(TaskStatusKind::Todo)
        .await?;
    let completed = tracker
        .queries
        .tasks_by_status_kind(TaskStatusKind::Completed)
        .await?;
    eyre::ensure!(todo.len() == 1, "task should remain todo");
    eyre::ensure!(completed.is_empty(), "no task should be completed");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn high_priority_query_spans_statuses(tracker: Tracker) -> Result<(), eyre::Report> {
    let urgent = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Outage", TaskPriority::Critical))
        .await?;
    let active = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Migration", TaskPriority::High))
        .await?;
    tracker
        .lifecycle
        .create(CreateTaskRequest::new("Tidy", TaskPriority::Low))
        .await?;
    tracker
        .lifecycle
        .update_status(active.id(), TaskStatus::in_progress("Bob"))
        .await?;

    let found = tracker.queries.high_priority_tasks().await?;
    let found_ids: Vec<TaskId> = found.iter().map(|task| task.id()).collect();

    eyre::ensure!(
        found_ids == vec![urgent.id(), active.id()],
        "unexpected high priority set {found_ids:?}"
    );

    let report = tracker.reports.process_daily_report().await?;
    eyre::ensure!(report.processed_count() == 2, "urgent and active should be reported");
    eyre::ensure!(report.summary() == "Processed 2 tasks.");
    Ok(())
}
