//! Task record and the write models used to create and edit it.

use super::{Deadline, TaskId, TaskName};
use chrono::{NaiveDateTime, SubsecRound};
use mockable::Clock;

/// A persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    name: TaskName,
    deadline: Option<Deadline>,
    created_at: NaiveDateTime,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Store-assigned identifier.
    pub id: TaskId,
    /// Persisted name.
    pub name: TaskName,
    /// Persisted deadline, `None` when the column is null.
    pub deadline: Option<Deadline>,
    /// Persisted creation timestamp.
    pub created_at: NaiveDateTime,
}

impl Task {
    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            deadline: data.deadline,
            created_at: data.created_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the deadline, if one is set.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Applies an edit, leaving the identifier and creation time intact.
    pub fn apply(&mut self, changes: TaskChanges) {
        self.name = changes.name;
        self.deadline = changes.deadline;
    }
}

/// A task that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    name: TaskName,
    deadline: Option<Deadline>,
    created_at: NaiveDateTime,
}

impl NewTask {
    /// Creates a new task stamped with the clock's current UTC time.
    ///
    /// Sub-second precision is dropped so the value survives a `TIMESTAMP`
    /// round trip unchanged.
    #[must_use]
    pub fn new(name: TaskName, deadline: Option<Deadline>, clock: &impl Clock) -> Self {
        Self {
            name,
            deadline,
            created_at: clock.utc().naive_utc().trunc_subsecs(0),
        }
    }

    /// Returns the task name.
    #[must_use]
    pub const fn name(&self) -> &TaskName {
        &self.name
    }

    /// Returns the deadline, if one was supplied.
    #[must_use]
    pub const fn deadline(&self) -> Option<&Deadline> {
        self.deadline.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Materialises the stored task once the store has assigned an id.
    #[must_use]
    pub fn into_task(self, id: TaskId) -> Task {
        Task {
            id,
            name: self.name,
            deadline: self.deadline,
            created_at: self.created_at,
        }
    }
}

/// Full replacement of a task's editable fields.
///
/// A `None` deadline clears any stored deadline; it never means "unchanged".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    /// Replacement name.
    pub name: TaskName,
    /// Replacement deadline.
    pub deadline: Option<Deadline>,
}

impl TaskChanges {
    /// Creates a change set.
    #[must_use]
    pub const fn new(name: TaskName, deadline: Option<Deadline>) -> Self {
        Self { name, deadline }
    }
}

/// Number of rows touched by a mutating statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct RowsAffected(u64);

impl RowsAffected {
    /// Wraps a row count.
    #[must_use]
    pub const fn new(count: u64) -> Self {
        Self(count)
    }

    /// Returns the row count.
    #[must_use]
    pub const fn count(self) -> u64 {
        self.0
    }

    /// Returns `true` when the statement matched no row.
    #[must_use]
    pub const fn is_noop(self) -> bool {
        self.0 == 0
    }
}

impl From<usize> for RowsAffected {
    fn from(count: usize) -> Self {
        Self(u64::try_from(count).unwrap_or(u64::MAX))
    }
}
