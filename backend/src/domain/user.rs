//! User data model.

use serde::{Deserialize, Serialize};

/// Initial `value` for rows created without an explicit value.
pub const DEFAULT_VALUE: i32 = 128;

/// Fixed `value` assigned to rows created by the random-user seeding flow.
pub const SEEDED_VALUE: i32 = 256;

/// Application user.
///
/// ## Invariants
/// - `id` is assigned exactly once by the store and never changes.
/// - `value` is unbounded: negative and arbitrarily large values are
///   permitted.
/// - `email` is never validated for format and need not be unique across
///   rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier, strictly increasing in creation order.
    pub id: i32,
    /// Contact address recorded at creation.
    pub email: String,
    /// Mutable counter replaced wholesale or stepped by agent actions.
    pub value: i32,
}
