//! Plain task records handed to the template renderer.

use crate::task::domain::{Deadline, STORAGE_FORMAT, Task};
use serde::Serialize;

/// Listing placeholder shown for a task without a deadline.
pub const NO_DEADLINE: &str = "no deadline";

/// Renders a deadline for the read-only listing.
///
/// A missing deadline becomes [`NO_DEADLINE`]; a present one is shown in
/// storage shape.
#[must_use]
pub fn listing_deadline(deadline: Option<&Deadline>) -> String {
    deadline.map_or_else(|| NO_DEADLINE.to_owned(), Deadline::to_storage_string)
}

/// Renders a deadline as the value of an editable form field.
///
/// A missing deadline becomes the empty string so the control shows
/// nothing; a present one is shown in input shape.
#[must_use]
pub fn edit_form_deadline(deadline: Option<&Deadline>) -> String {
    deadline.map_or_else(String::new, Deadline::to_input_string)
}

/// Task data shape consumed by templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    /// Task identifier.
    pub id: i32,
    /// Task name.
    pub name: String,
    /// Deadline text, already converted for the target view.
    pub deadline: String,
    /// Creation timestamp in storage shape.
    pub created_at: String,
}

impl TaskRecord {
    /// Builds the record shown in the task listing.
    #[must_use]
    pub fn for_listing(task: &Task) -> Self {
        Self::with_deadline(task, listing_deadline(task.deadline()))
    }

    /// Builds the record used to pre-fill the edit form.
    #[must_use]
    pub fn for_edit_form(task: &Task) -> Self {
        Self::with_deadline(task, edit_form_deadline(task.deadline()))
    }

    fn with_deadline(task: &Task, deadline: String) -> Self {
        Self {
            id: task.id().into_inner(),
            name: task.name().as_str().to_owned(),
            deadline,
            created_at: task.created_at().format(STORAGE_FORMAT).to_string(),
        }
    }
}
