//! Diesel schema for task persistence.

diesel::table! {
    /// Task records scoped by owner.
    tasks (id) {
        /// Task identifier.
        id -> Uuid,
        /// Owning user identifier.
        owner_id -> Uuid,
        /// Trimmed task title.
        title -> Text,
        /// Task status.
        #[max_length = 20]
        status -> Varchar,
        /// Insertion timestamp.
        created_at -> Timestamptz,
        /// Insertion order used to break timestamp ties.
        seq -> Int8,
    }
}
