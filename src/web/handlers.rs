//! Request handlers.
//!
//! Each handler extracts form or query values, calls exactly one task board
//! operation, and then renders a page or redirects to the listing.

use super::{AppState, WebError};
use crate::task::{
    ports::TaskRepository,
    services::{AddTaskRequest, EditTaskRequest},
};
use axum::{
    Form,
    extract::{Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use mockable::Clock;
use serde::Deserialize;

/// Path of the task listing; every mutation redirects here.
pub const HOME_PATH: &str = "/home/";

/// Query or form carrying only a task id.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TaskIdField {
    /// Task identifier as submitted.
    pub id: String,
}

/// `GET /home/`: renders all tasks.
pub async fn home<R, C>(State(state): State<AppState<R, C>>) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = render_home(&state).await;
    state.respond(result)
}

async fn render_home<R, C>(state: &AppState<R, C>) -> Result<Html<String>, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let tasks = state.board.list_tasks().await?;
    Ok(Html(state.pages.home(&tasks)?))
}

/// `GET /add/`: renders the empty creation form.
pub async fn add_form<R, C>(State(state): State<AppState<R, C>>) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = state.pages.add_form().map(Html).map_err(WebError::from);
    state.respond(result)
}

/// `GET /edit/?id=`: renders the edit form for one task.
pub async fn edit_form<R, C>(
    State(state): State<AppState<R, C>>,
    Query(query): Query<TaskIdField>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = render_edit_form(&state, &query.id).await;
    state.respond(result)
}

async fn render_edit_form<R, C>(
    state: &AppState<R, C>,
    raw_id: &str,
) -> Result<Html<String>, WebError>
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let task = state.board.task_for_edit(raw_id).await?;
    Ok(Html(state.pages.edit_form(&task)?))
}

/// `POST /save_add/`: creates a task.
pub async fn save_add<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<AddTaskRequest>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = state.board.add_task(form).await.map(|_| redirect_home());
    state.respond(result.map_err(WebError::from))
}

/// `POST /save_edit/`: rewrites a task's name and deadline.
pub async fn save_edit<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<EditTaskRequest>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = state.board.edit_task(form).await.map(|_| redirect_home());
    state.respond(result.map_err(WebError::from))
}

/// `POST /delete/`: deletes a task.
pub async fn delete<R, C>(
    State(state): State<AppState<R, C>>,
    Form(form): Form<TaskIdField>,
) -> Response
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    let result = state
        .board
        .delete_task(&form.id)
        .await
        .map(|_| redirect_home());
    state.respond(result.map_err(WebError::from))
}

/// `302 Found` pointing at the listing.
#[must_use]
pub fn redirect_home() -> Response {
    (StatusCode::FOUND, [(header::LOCATION, HOME_PATH)]).into_response()
}
