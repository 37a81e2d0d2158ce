//! Task deadline value and its two textual shapes.
//!
//! Deadlines are stored as a nullable `TIMESTAMP` and rendered in the
//! storage shape (`2024-05-01 09:30:00`). Editable form fields use the
//! input shape (`2024-05-01T09:30`), which drops seconds.

use super::TaskDomainError;
use chrono::NaiveDateTime;
use std::fmt;

/// `strftime` pattern of the storage shape.
pub const STORAGE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `strftime` pattern of the input-control shape.
pub const INPUT_FORMAT: &str = "%Y-%m-%dT%H:%M";

// Browsers emit seconds when the control carries a `step` attribute.
const INPUT_FORMAT_WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S";

/// A task deadline with second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Deadline(NaiveDateTime);

impl Deadline {
    /// Wraps a timestamp read from storage.
    #[must_use]
    pub const fn from_naive(value: NaiveDateTime) -> Self {
        Self(value)
    }

    /// Returns the wrapped timestamp.
    #[must_use]
    pub const fn into_inner(self) -> NaiveDateTime {
        self.0
    }

    /// Parses a deadline in input shape.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] when the value matches
    /// neither `YYYY-MM-DDTHH:MM` nor `YYYY-MM-DDTHH:MM:SS`.
    pub fn parse_input(raw: &str) -> Result<Self, TaskDomainError> {
        let trimmed = raw.trim();
        NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, INPUT_FORMAT_WITH_SECONDS))
            .map(Self)
            .map_err(|_| TaskDomainError::InvalidDeadline(raw.to_owned()))
    }

    /// Parses an optional deadline form field.
    ///
    /// A blank field means "no deadline" and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidDeadline`] when a non-blank value is
    /// not in input shape.
    pub fn from_form_field(raw: &str) -> Result<Option<Self>, TaskDomainError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Self::parse_input(raw).map(Some)
    }

    /// Renders the deadline in storage shape.
    #[must_use]
    pub fn to_storage_string(&self) -> String {
        self.0.format(STORAGE_FORMAT).to_string()
    }

    /// Renders the deadline in input shape, truncating seconds.
    #[must_use]
    pub fn to_input_string(&self) -> String {
        self.0.format(INPUT_FORMAT).to_string()
    }
}

impl fmt::Display for Deadline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STORAGE_FORMAT))
    }
}
