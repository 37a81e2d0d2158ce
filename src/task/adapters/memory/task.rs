//! In-memory repository for task list tests.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::task::{
    domain::{NewTask, RowsAffected, Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

/// Thread-safe in-memory task repository.
///
/// Identifiers are assigned from a counter starting at 1 and are never
/// reused, matching a `SERIAL` column.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<InMemoryTaskState>>,
}

#[derive(Debug, Default)]
struct InMemoryTaskState {
    tasks: BTreeMap<TaskId, Task>,
    last_id: i32,
}

impl InMemoryTaskRepository {
    /// Creates an empty in-memory repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
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
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read()?;
        Ok(state.tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read()?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<RowsAffected> {
        let mut state = self.write()?;
        let next = state.last_id.checked_add(1).ok_or_else(|| {
            TaskRepositoryError::persistence(std::io::Error::other("task id sequence exhausted"))
        })?;
        state.last_id = next;
        let id = TaskId::new(next);
        state.tasks.insert(id, task.clone().into_task(id));
        Ok(RowsAffected::new(1))
    }

    async fn update(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<RowsAffected> {
        let mut state = self.write()?;
        let Some(task) = state.tasks.get_mut(&id) else {
            return Ok(RowsAffected::new(0));
        };
        task.apply(changes.clone());
        Ok(RowsAffected::new(1))
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<RowsAffected> {
        let mut state = self.write()?;
        let removed = state.tasks.remove(&id).map_or(0, |_| 1);
        Ok(RowsAffected::new(removed))
    }
}
