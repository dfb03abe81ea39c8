//! Diesel table definitions for the PostgreSQL schema.
//!
//! These definitions must match the embedded migrations exactly; Diesel
//! uses them for type-safe SQL generation.

diesel::table! {
    /// Account rows adjusted by agent actions.
    users (id) {
        /// Primary key: auto-incrementing serial.
        id -> Int4,
        /// Contact address; not validated, not unique.
        email -> Text,
        /// Mutable counter, defaults to 128 at insert.
        value -> Int4,
    }
}
