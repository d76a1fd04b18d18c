//! Given steps for task tracking BDD scenarios.

use super::world::{TaskTrackingWorld, TrackerServices, run_async};
use eyre::WrapErr;
use rstest_bdd_macros::given;
use tasktrack::task::{
    domain::{TaskPriority, UserRegistry},
    services::{CreateTaskRequest, TransitionTaskRequest},
};

#[given(r#"a tracker whose registry lists "{first}" and "{second}""#)]
fn tracker_with_registry(world: &mut TaskTrackingWorld, first: String, second: String) {
    world.services = Some(TrackerServices::new(UserRegistry::new([first, second])));
}

#[given(r#"a task titled "{title}" with priority "{priority}""#)]
fn task_titled(
    world: &mut TaskTrackingWorld,
    title: String,
    priority: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario: {err}"))?;
    let created = run_async(
        world
            .services()?
            .lifecycle
            .create(CreateTaskRequest::new(title, parsed)),
    )
    .wrap_err("create task for scenario")?;
    world.last_task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{target}" with detail "{detail}""#)]
fn task_has_been_moved(
    world: &mut TaskTrackingWorld,
    target: String,
    detail: String,
) -> Result<(), eyre::Report> {
    let task_id = world.last_task()?.id();
    let moved = run_async(
        world
            .services()?
            .lifecycle
            .transition_task(TransitionTaskRequest::new(task_id, target).with_detail(detail)),
    )
    .wrap_err("transition task in scenario setup")?;
    world.last_task = Some(moved);
    Ok(())
}
