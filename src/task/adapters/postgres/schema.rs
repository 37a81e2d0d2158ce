//! Diesel schema for task list persistence.

diesel::table! {
    /// Task list rows.
    tasks (id) {
        /// Store-assigned identifier.
        id -> Int4,
        /// Task label.
        name -> Text,
        /// Optional deadline; null when none is set.
        deadline -> Nullable<Timestamp>,
        /// Creation timestamp.
        created_at -> Timestamp,
    }
}
