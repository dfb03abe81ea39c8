//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only
//! depend on the domain port and generator and remain testable without
//! touching PostgreSQL.

use std::sync::Arc;

use crate::domain::EmailGenerator;
use crate::domain::ports::UserRepository;

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Row store holding user records.
    pub users: Arc<dyn UserRepository>,
    /// Seed-data email synthesiser.
    pub generator: EmailGenerator,
}

impl HttpState {
    /// Construct state from a repository and a generator.
    pub fn new(users: Arc<dyn UserRepository>, generator: EmailGenerator) -> Self {
        Self { users, generator }
    }
}
