//! Service layer translating form input into task repository calls.

use crate::task::{
    domain::{Deadline, NewTask, RowsAffected, TaskChanges, TaskDomainError, TaskId, TaskName},
    ports::{TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use serde::Deserialize;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

use super::record::TaskRecord;

/// Form fields submitted when creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AddTaskRequest {
    /// Task name.
    pub name: String,
    /// Deadline in input shape, or empty for none.
    pub deadline: String,
}

impl AddTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(name: impl Into<String>, deadline: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            deadline: deadline.into(),
        }
    }
}

/// Form fields submitted when editing a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EditTaskRequest {
    /// Task identifier as submitted.
    pub id: String,
    /// Replacement name.
    pub name: String,
    /// Replacement deadline in input shape; empty clears the deadline.
    pub deadline: String,
}

impl EditTaskRequest {
    /// Creates a request from raw field values.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        deadline: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            deadline: deadline.into(),
        }
    }
}

/// Service-level errors for task board operations.
#[derive(Debug, Error)]
pub enum TaskBoardError {
    /// Form input could not be turned into domain values.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] TaskRepositoryError),
    /// No task has the requested identifier.
    #[error("task not found: {0}")]
    NotFound(TaskId),
}

/// Result type for task board service operations.
pub type TaskBoardResult<T> = Result<T, TaskBoardError>;

/// Task board service: one repository call per operation.
#[derive(Clone)]
pub struct TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> TaskBoardService<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task board service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Lists every task for the read-only listing.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Repository`] when the listing query fails.
    pub async fn list_tasks(&self) -> TaskBoardResult<Vec<TaskRecord>> {
        let tasks = self.repository.list_all().await?;
        debug!(count = tasks.len(), "listed tasks");
        Ok(tasks.iter().map(TaskRecord::for_listing).collect())
    }

    /// Loads one task to pre-fill the edit form.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an unparseable id,
    /// [`TaskBoardError::NotFound`] when no task matches, or
    /// [`TaskBoardError::Repository`] when the lookup fails.
    pub async fn task_for_edit(&self, raw_id: &str) -> TaskBoardResult<TaskRecord> {
        let id: TaskId = raw_id.parse()?;
        let task = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(TaskBoardError::NotFound(id))?;
        Ok(TaskRecord::for_edit_form(&task))
    }

    /// Creates a task from submitted form fields.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for a blank name or malformed
    /// deadline, or [`TaskBoardError::Repository`] when the insert fails.
    pub async fn add_task(&self, request: AddTaskRequest) -> TaskBoardResult<RowsAffected> {
        let name = TaskName::new(request.name)?;
        let deadline = Deadline::from_form_field(&request.deadline)?;
        let task = NewTask::new(name, deadline, &*self.clock);
        let rows = self.repository.insert(&task).await?;
        info!(rows = rows.count(), "inserted task");
        Ok(rows)
    }

    /// Rewrites a task's name and deadline from submitted form fields.
    ///
    /// An empty deadline clears the stored one. A zero row count means the
    /// id matched nothing and is returned rather than raised.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an unparseable id, blank name,
    /// or malformed deadline, or [`TaskBoardError::Repository`] when the
    /// update fails.
    pub async fn edit_task(&self, request: EditTaskRequest) -> TaskBoardResult<RowsAffected> {
        let id: TaskId = request.id.parse()?;
        let name = TaskName::new(request.name)?;
        let deadline = Deadline::from_form_field(&request.deadline)?;
        let rows = self
            .repository
            .update(id, &TaskChanges::new(name, deadline))
            .await?;
        info!(task_id = %id, rows = rows.count(), "updated task");
        Ok(rows)
    }

    /// Deletes a task by its submitted id.
    ///
    /// # Errors
    ///
    /// Returns [`TaskBoardError::Domain`] for an unparseable id or
    /// [`TaskBoardError::Repository`] when the delete fails.
    pub async fn delete_task(&self, raw_id: &str) -> TaskBoardResult<RowsAffected> {
        let id: TaskId = raw_id.parse()?;
        let rows = self.repository.delete(id).await?;
        info!(task_id = %id, rows = rows.count(), "deleted task");
        Ok(rows)
    }
}
