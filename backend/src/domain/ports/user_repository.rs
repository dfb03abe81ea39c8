//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::user::User;

/// Persistence errors raised by user repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserPersistenceError {
    /// Repository connection could not be established or checked out.
    #[error("user repository connection failed: {message}")]
    Connection {
        /// Adapter-provided failure description.
        message: String,
    },
    /// Query or mutation failed during execution.
    #[error("user repository query failed: {message}")]
    Query {
        /// Adapter-provided failure description.
        message: String,
    },
}

impl UserPersistenceError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Row-store contract for `users` records.
///
/// Each operation runs as one independent statement against the store.
/// [`UserRepository::adjust_value`] in particular must express its
/// arithmetic inside a single conditional update so concurrent adjustments
/// to the same row never lose updates.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Create a row with a store-assigned id and return it.
    async fn insert(&self, email: &str, value: i32) -> Result<User, UserPersistenceError>;

    /// Replace `value` for the matching row; `None` when the id is absent.
    async fn set_value(&self, id: i32, value: i32)
    -> Result<Option<User>, UserPersistenceError>;

    /// Apply a signed step to `value` atomically; `None` when the id is
    /// absent. No row is created for unknown ids.
    async fn adjust_value(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Every stored row, ascending by id.
    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError>;
}
