//! In-memory task repository.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, Task, TaskId, TaskStatusKind},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// A single lock guards both the task map and the identifier counter, so
/// readers never observe a half-applied insert or update.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: Option<TaskId>,
}

impl InMemoryTaskState {
    fn allocate_id(&mut self) -> Option<TaskId> {
        let id = self.last_id.map_or(Some(TaskId::FIRST), TaskId::next)?;
        self.last_id = Some(id);
        Some(id)
    }

    fn collect_where(&self, predicate: impl Fn(&Task) -> bool) -> Vec<Task> {
        self.tasks
            .values()
            .filter(|&task| predicate(task))
            .cloned()
            .collect()
    }
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty repository whose next identifier follows `last_id`.
    #[cfg(test)]
    #[must_use]
    pub(crate) fn resuming_after(last_id: TaskId) -> Self {
        let state = InMemoryTaskState {
            tasks: BTreeMap::new(),
            last_id: Some(last_id),
        };
        Self {
            state: Arc::new(RwLock::new(state)),
        }
    }

    fn read(&self) -> TaskRepositoryResult<RwLockReadGuard<'_, InMemoryTaskState>> {
        self.state.read().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }

    fn write(&self) -> TaskRepositoryResult<RwLockWriteGuard<'_, InMemoryTaskState>> {
        self.state.write().map_err(|err| {
            TaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
        })
    }
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn insert(&self, new_task: NewTask) -> TaskRepositoryResult<Task> {
        let mut state = self.write()?;
        let id = state.allocate_id().ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other(
                "task identifier space exhausted",
            ))
        })?;
        let task = Task::from_new(id, new_task);
        state.tasks.insert(id, task.clone());
        Ok(task)
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write()?;
        let stored = state
            .tasks
            .get(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;

        if stored.revision().checked_add(1) != Some(task.revision()) {
            return Err(TaskRepositoryError::Conflict(task.id()));
        }

        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn find_by_status_kind(&self, kind: TaskStatusKind) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.collect_where(|task| task.status().kind() == kind))
    }

    async fn find_high_priority(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.collect_where(|task| task.priority().is_high()))
    }

    async fn snapshot(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn count(&self) -> TaskRepositoryResult<usize> {
        let state = self.read()?;
        Ok(state.tasks.len())
    }
}
