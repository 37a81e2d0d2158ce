//! Server-side page rendering with `minijinja`.
//!
//! Templates are compiled into the binary. File names end in `.html`, so
//! `minijinja` HTML-escapes every interpolated value.

use crate::task::services::TaskRecord;
use minijinja::{Environment, context};

const HOME_TEMPLATE: &str = "home.html";
const ADD_TEMPLATE: &str = "add.html";
const EDIT_TEMPLATE: &str = "edit.html";
const ERROR_TEMPLATE: &str = "error.html";

/// Compiled page templates.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compiles the bundled templates.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] if a bundled template fails to parse.
    pub fn new() -> Result<Self, minijinja::Error> {
        let mut env = Environment::new();
        env.add_template(HOME_TEMPLATE, include_str!("../../templates/home.html"))?;
        env.add_template(ADD_TEMPLATE, include_str!("../../templates/add.html"))?;
        env.add_template(EDIT_TEMPLATE, include_str!("../../templates/edit.html"))?;
        env.add_template(ERROR_TEMPLATE, include_str!("../../templates/error.html"))?;
        Ok(Self { env })
    }

    /// Renders the task listing.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn home(&self, tasks: &[TaskRecord]) -> Result<String, minijinja::Error> {
        self.env
            .get_template(HOME_TEMPLATE)?
            .render(context! { tasks => tasks })
    }

    /// Renders the empty creation form.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn add_form(&self) -> Result<String, minijinja::Error> {
        self.env.get_template(ADD_TEMPLATE)?.render(context! {})
    }

    /// Renders the edit form pre-filled with `task`.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn edit_form(&self, task: &TaskRecord) -> Result<String, minijinja::Error> {
        self.env
            .get_template(EDIT_TEMPLATE)?
            .render(context! { task => task })
    }

    /// Renders an error page.
    ///
    /// # Errors
    ///
    /// Returns a [`minijinja::Error`] when rendering fails.
    pub fn error_page(&self, status: &str, message: &str) -> Result<String, minijinja::Error> {
        self.env
            .get_template(ERROR_TEMPLATE)?
            .render(context! { status => status, message => message })
    }
}
