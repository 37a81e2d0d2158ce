//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing domain task values from raw input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task name is empty after trimming.
    #[error("task name must not be empty")]
    EmptyName,

    /// The deadline is not in `YYYY-MM-DDTHH:MM` input shape.
    #[error("invalid deadline '{0}', expected YYYY-MM-DDTHH:MM")]
    InvalidDeadline(String),

    /// The task identifier is missing or not an integer.
    #[error("invalid task id '{0}'")]
    InvalidTaskId(String),
}
