//! Unit tests for the task list module.


use crate::task::domain::STORAGE_FORMAT;
use chrono::NaiveDateTime;

/// Parses a storage-shape timestamp literal.
fn storage_timestamp(raw: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(raw, STORAGE_FORMAT).expect("valid storage-shape timestamp")
}
