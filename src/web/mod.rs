//! HTTP surface of the task list.
//!
//! Routes:
//!
//! | Method | Path          | Handler                    |
//! |--------|---------------|----------------------------|
//! | GET    | `/home/`      | [`handlers::home`]         |
//! | GET    | `/add/`       | [`handlers::add_form`]     |
//! | GET    | `/edit/`      | [`handlers::edit_form`]    |
//! | POST   | `/save_add/`  | [`handlers::save_add`]     |
//! | POST   | `/save_edit/` | [`handlers::save_edit`]    |
//! | POST   | `/delete/`    | [`handlers::delete`]       |

mod error;
pub mod handlers;
mod templates;

pub use error::WebError;
pub use templates::PageRenderer;

use crate::task::{ports::TaskRepository, services::TaskBoardService};
use axum::{
    Router,
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use mockable::Clock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Shared state handed to every handler.
pub struct AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Task board service wrapping the injected repository.
    pub board: Arc<TaskBoardService<R, C>>,
    /// Compiled page templates.
    pub pages: Arc<PageRenderer>,
}

impl<R, C> Clone for AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    fn clone(&self) -> Self {
        Self {
            board: Arc::clone(&self.board),
            pages: Arc::clone(&self.pages),
        }
    }
}

impl<R, C> AppState<R, C>
where
    R: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Creates handler state from a service and a renderer.
    #[must_use]
    pub fn new(board: TaskBoardService<R, C>, pages: PageRenderer) -> Self {
        Self {
            board: Arc::new(board),
            pages: Arc::new(pages),
        }
    }

    /// Turns a handler outcome into a response, logging failures.
    pub fn respond(&self, result: Result<impl IntoResponse, WebError>) -> Response {
        match result {
            Ok(response) => response.into_response(),
            Err(err) => self.error_response(&err),
        }
    }

    fn error_response(&self, err: &WebError) -> Response {
        let status = err.status();
        if status.is_server_error() {
            error!(error = %err, "request failed");
        } else {
            warn!(error = %err, status = status.as_u16(), "request rejected");
        }

        let reason = status.canonical_reason().unwrap_or("Error");
        let title = format!("{} {reason}", status.as_u16());
        match self.pages.error_page(&title, &err.public_message()) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(render_err) => {
                error!(error = %render_err, "error page rendering failed");
                (status, reason).into_response()
            }
        }
    }
}

/// Builds the router with all task routes.
pub fn router<R, C>(state: AppState<R, C>) -> Router
where
    R: TaskRepository + 'static,
    C: Clock + Send + Sync + 'static,
{
    Router::new()
        .route(handlers::HOME_PATH, get(handlers::home::<R, C>))
        .route("/add/", get(handlers::add_form::<R, C>))
        .route("/edit/", get(handlers::edit_form::<R, C>))
        .route("/save_add/", post(handlers::save_add::<R, C>))
        .route("/save_edit/", post(handlers::save_edit::<R, C>))
        .route("/delete/", post(handlers::delete::<R, C>))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

/// Serves `app` on `listener` until Ctrl+C is received.
///
/// # Errors
///
/// Returns an I/O error if the listener fails.
pub async fn serve(listener: TcpListener, app: Router) -> std::io::Result<()> {
    let local_addr = listener.local_addr()?;
    info!(%local_addr, "task list server started");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
