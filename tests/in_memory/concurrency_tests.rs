//! Contention tests for the in-memory task store.

use std::collections::BTreeSet;
use std::sync::Arc;

use super::helpers::{Tracker, tracker};
use mockable::DefaultClock;
use rstest::rstest;
use tasktrack::task::{
    domain::{NewTask, TaskPriority, TaskStatus},
    ports::{TaskRepository, TaskRepositoryError},
    services::CreateTaskRequest,
};
use tokio::sync::Barrier;

const WRITERS: u64 = 32;

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_inserts_allocate_gap_free_ids(tracker: Tracker) -> Result<(), eyre::Report> {
    let mut handles = Vec::new();
    for index in 0..WRITERS {
        let repository = Arc::clone(&tracker.repository);
        let new_task = NewTask::new(format!("Task {index}"), "", TaskPriority::Low, &DefaultClock)?;
        handles.push(tokio::spawn(async move { repository.insert(new_task).await }));
    }

    let mut ids = BTreeSet::new();
    for handle in handles {
        let task = handle.await??;
        ids.insert(task.id().value());
    }

    let expected: BTreeSet<u64> = (1..=WRITERS).collect();
    eyre::ensure!(ids == expected, "ids should be exactly 1..={WRITERS}, got {ids:?}");
    eyre::ensure!(tracker.lifecycle.task_count().await? == 32);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_writers_on_one_revision_leave_one_winner(
    tracker: Tracker,
) -> Result<(), eyre::Report> {
    let task = tracker
        .lifecycle
        .create(CreateTaskRequest::new("Contended", TaskPriority::High))
        .await?;
    let barrier = Arc::new(Barrier::new(2));

    let mut handles = Vec::new();
    for assignee in ["Alice", "Bob"] {
        let repository = Arc::clone(&tracker.repository);
        let validator = tracker.lifecycle.validator().clone();
        let gate = Arc::clone(&barrier);
        let task_id = task.id();
        handles.push(tokio::spawn(async move {
            let mut copy = repository
                .find_by_id(task_id)
                .await?
                .ok_or(TaskRepositoryError::NotFound(task_id))?;
            gate.wait().await;
            copy.transition_to(TaskStatus::in_progress(assignee), &validator, &DefaultClock)
                .map_err(TaskRepositoryError::persistence)?;
            repository.update(&copy).await
        }));
    }

    let mut applied = 0;
    let mut conflicts = 0;
    for handle in handles {
        match handle.await? {
            Ok(()) => applied += 1,
            Err(TaskRepositoryError::Conflict(id)) if id == task.id() => conflicts += 1,
            Err(other) => eyre::bail!("unexpected writer outcome: {other:?}"),
        }
    }
    eyre::ensure!(
        applied == 1 && conflicts == 1,
        "expected one applied write and one conflict, got {applied} and {conflicts}"
    );

    let stored = tracker.lifecycle.get(task.id()).await?;
    eyre::ensure!(stored.revision() == 1, "only one transition should be stored");
    eyre::ensure!(
        stored.status().assignee().is_some(),
        "the winning assignment should be stored"
    );
    Ok(())
}
