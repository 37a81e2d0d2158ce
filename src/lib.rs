//! Tasklist: a single-table task list served over HTTP.
//!
//! Tasks have a name, an optional deadline, and a creation timestamp. They
//! are stored in `PostgreSQL` and rendered through server-side templates.
//!
//! # Architecture
//!
//! Tasklist follows hexagonal architecture principles:
//!
//! - **Domain**: Task values and deadline shape conversions
//! - **Ports**: The task repository trait
//! - **Adapters**: `PostgreSQL` and in-memory repositories
//!
//! # Modules
//!
//! - [`task`]: Task domain, repository port, adapters, and services
//! - [`web`]: HTTP routes, handlers, and templates
//! - [`config`]: Server configuration
//! - [`telemetry`]: Logging set-up

pub mod config;
pub mod task;
pub mod telemetry;
pub mod web;
