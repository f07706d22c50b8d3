//! Diesel schema for task lifecycle persistence.

diesel::table! {
    /// Task records with their lifecycle status.
    tasks (id) {
        /// Task identifier as hyphenated UUID text.
        id -> Text,
        /// Non-empty task title.
        title -> Text,
        /// Optional free-form description.
        description -> Nullable<Text>,
        /// Task lifecycle status token.
        #[max_length = 50]
        status -> Varchar,
        /// Optional assignee.
        assigned_to -> Nullable<Text>,
        /// Optimistic-concurrency version.
        version -> BigInt,
        /// Creation timestamp.
        created_at -> TimestamptzSqlite,
        /// Last update timestamp.
        updated_at -> TimestamptzSqlite,
    }
}
