//! Repository port for task persistence.

use crate::task::domain::{NewTask, RowsAffected, Task, TaskChanges, TaskId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task repository operations.
pub type TaskRepositoryResult<T> = Result<T, TaskRepositoryError>;

/// Task persistence contract.
///
/// Each operation maps to exactly one store statement.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Returns every stored task in store-defined order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] if the query or any row
    /// decode fails. No partial result is returned.
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when no row has the identifier.
    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;

    /// Stores a new task and returns the number of inserted rows.
    ///
    /// # Errors
    ///
    /// Returns [`TaskRepositoryError::Persistence`] on constraint violations
    /// or connection failures.
    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<RowsAffected>;

    /// Rewrites the name and deadline of the task with the given identifier.
    ///
    /// A zero count means the identifier matched nothing.
    async fn update(&self, id: TaskId, changes: &TaskChanges)
    -> TaskRepositoryResult<RowsAffected>;

    /// Deletes the task with the given identifier.
    ///
    /// A zero count means the identifier matched nothing.
    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<RowsAffected>;
}

/// Errors returned by task repository implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskRepositoryError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
