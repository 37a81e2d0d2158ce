//! Domain model for the task list.
//!
//! The domain holds the validated task values and the deadline shape
//! conversions while keeping all infrastructure concerns outside of the
//! domain boundary.

mod deadline;
mod error;
mod ids;
mod task;

pub use deadline::{Deadline, INPUT_FORMAT, STORAGE_FORMAT};
pub use error::TaskDomainError;
pub use ids::{TaskId, TaskName};
pub use task::{NewTask, PersistedTaskData, RowsAffected, Task, TaskChanges};
