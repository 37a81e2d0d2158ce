//! Test doubles shared by integration tests.

use async_trait::async_trait;
use mockall::mock;
use tasklist::task::{
    domain::{NewTask, RowsAffected, Task, TaskChanges, TaskId},
    ports::{TaskRepository, TaskRepositoryError, TaskRepositoryResult},
};

mock! {
    pub Repository {}

    #[async_trait]
    impl TaskRepository for Repository {
        async fn list_all(&self) -> TaskRepositoryResult<Vec<Task>>;
        async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>>;
        async fn insert(&self, task: &NewTask) -> TaskRepositoryResult<RowsAffected>;
        async fn update(
            &self,
            id: TaskId,
            changes: &TaskChanges,
        ) -> TaskRepositoryResult<RowsAffected>;
        async fn delete(&self, id: TaskId) -> TaskRepositoryResult<RowsAffected>;
    }
}

/// Persistence error standing in for a dropped database connection.
pub fn connection_lost() -> TaskRepositoryError {
    TaskRepositoryError::persistence(std::io::Error::other("connection lost"))
}
