//! Ports: interfaces the domain expects adapters to implement.

pub mod user_repository;

pub use user_repository::{UserPersistenceError, UserRepository};
