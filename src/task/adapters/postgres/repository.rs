//! `PostgreSQL` repository implementation for task list storage.

use super::{
    models::{NewTaskRow, TaskChangeset, TaskRow},
    schema::tasks,
};
use crate::task::{
    domain::{
        Deadline, NewTask, PersistedTaskData, RowsAffected, Task, TaskChanges, TaskId, TaskName,
    },
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool, PoolError};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: TaskPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    /// Builds a connection pool for `database_url` and wraps it.
    ///
    /// The pool opens its initial connections eagerly, so an unreachable
    /// server or rejected credentials fail here rather than on the first
    /// request.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError`] when no connection can be established.
    pub fn connect(database_url: &str, max_size: u32) -> Result<Self, PoolError> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);
        let pool = Pool::builder().max_size(max_size).build(manager)?;
        Ok(Self::new(pool))
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(|connection| {
            let rows = tasks::table
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_task).collect())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            Ok(row.map(row_to_task))
        })
        .await
    }

    async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<RowsAffected> {
        let new_row = to_new_row(task);
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map(RowsAffected::from)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn update(
        &self,
        id: TaskId,
        changes: &TaskChanges,
    ) -> TaskRepositoryResult<RowsAffected> {
        let changeset = to_changeset(changes);
        self.run_blocking(move |connection| {
            diesel::update(tasks::table.find(id.into_inner()))
                .set(&changeset)
                .execute(connection)
                .map(RowsAffected::from)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<RowsAffected> {
        self.run_blocking(move |connection| {
            diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map(RowsAffected::from)
                .map_err(TaskRepositoryError::persistence)
        })
        .await
    }
}

fn to_new_row(task: &NewTask) -> NewTaskRow {
    NewTaskRow {
        name: task.name().as_str().to_owned(),
        deadline: task.deadline().copied().map(Deadline::into_inner),
        created_at: task.created_at(),
    }
}

fn to_changeset(changes: &TaskChanges) -> TaskChangeset {
    TaskChangeset {
        name: changes.name.as_str().to_owned(),
        deadline: changes.deadline.map(Deadline::into_inner),
    }
}

fn row_to_task(row: TaskRow) -> Task {
    let TaskRow {
        id,
        name,
        deadline,
        created_at,
    } = row;

    Task::from_persisted(PersistedTaskData {
        id: TaskId::new(id),
        name: TaskName::from_persisted(name),
        deadline: deadline.map(Deadline::from_naive),
        created_at,
    })
}
