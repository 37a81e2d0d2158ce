//! HTTP error mapping for request handlers.
//!
//! Every failure is scoped to the request that caused it: the handler logs
//! it and answers with an error status while the server keeps running.

use crate::task::services::TaskBoardError;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors a request handler can end with.
#[derive(Debug, Error)]
pub enum WebError {
    /// The task board service rejected or failed the request.
    #[error(transparent)]
    Board(#[from] TaskBoardError),
    /// A page template failed to render.
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

impl WebError {
    /// Returns the HTTP status reported for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Board(TaskBoardError::Domain(_)) => StatusCode::BAD_REQUEST,
            Self::Board(TaskBoardError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Board(TaskBoardError::Repository(_)) | Self::Template(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the message shown to the user.
    ///
    /// Internal failures get a fixed message; their details only reach the
    /// log.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::Board(TaskBoardError::Domain(err)) => err.to_string(),
            Self::Board(TaskBoardError::NotFound(id)) => format!("Task {id} was not found."),
            Self::Board(TaskBoardError::Repository(_)) | Self::Template(_) => {
                "The request could not be completed.".to_owned()
            }
        }
    }
}
