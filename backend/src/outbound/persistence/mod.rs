//! PostgreSQL persistence adapters using Diesel ORM.
//!
//! Concrete implementation of the domain's repository port backed by
//! PostgreSQL via `diesel-async` with `bb8` connection pooling.
//!
//! # Architecture
//!
//! - **Thin adapters**: the repository only translates between Diesel row
//!   structs and domain types. No business logic resides here.
//! - **Internal models**: row structs (`models.rs`) and table definitions
//!   (`schema.rs`) are implementation details, never exposed to the domain.
//! - **Strongly typed errors**: database failures are mapped to the
//!   domain's persistence error type at this seam.
//! - **Single-statement mutations**: the agent-action arithmetic runs
//!   inside one conditional `UPDATE` so concurrent steps cannot lose
//!   updates.

mod bootstrap;
mod diesel_user_repository;
mod models;
mod pool;
mod schema;

pub use bootstrap::{MigrationError, run_migrations};
pub use diesel_user_repository::DieselUserRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
