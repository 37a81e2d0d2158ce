//! Diesel row models for task persistence.

use super::schema::tasks;
use chrono::NaiveDateTime;
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Store-assigned identifier.
    pub id: i32,
    /// Task label.
    pub name: String,
    /// Optional deadline.
    pub deadline: Option<NaiveDateTime>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_default_value = false)]
pub struct NewTaskRow {
    /// Task label.
    pub name: String,
    /// Optional deadline, written as `NULL` when absent.
    pub deadline: Option<NaiveDateTime>,
    /// Creation timestamp.
    pub created_at: NaiveDateTime,
}

/// Update model for the editable task columns.
///
/// `None` writes `NULL` so that an empty deadline clears the stored value.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = tasks)]
#[diesel(treat_none_as_null = true)]
pub struct TaskChangeset {
    /// Replacement label.
    pub name: String,
    /// Replacement deadline.
    pub deadline: Option<NaiveDateTime>,
}
