//! Test helpers shared by unit and integration tests.
//!
//! Provides an in-memory `UserRepository` and a pre-wired handler state so
//! endpoint tests run without PostgreSQL. Compiled only for tests or when
//! the `test-support` feature is enabled.

use std::sync::{Arc, Mutex};

use actix_web::web;
use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{EmailGenerator, User, WordCorpus};
use crate::inbound::http::state::HttpState;

/// Word entries used by the fixture corpus.
pub const FIXTURE_WORDS: [&str; 4] = ["amber", "basalt", "cedar", "dune"];

/// Domain entries used by the fixture corpus.
pub const FIXTURE_DOMAINS: [&str; 2] = ["example.com", "example.org"];

/// Build the fixture corpus backing generator-dependent tests.
pub fn fixture_corpus() -> WordCorpus {
    WordCorpus::from_parts(
        FIXTURE_WORDS.iter().map(|w| (*w).to_owned()).collect(),
        FIXTURE_DOMAINS.iter().map(|d| (*d).to_owned()).collect(),
    )
}

/// In-memory `UserRepository` with store-assigned sequential ids.
///
/// Mirrors the atomicity contract of the real adapter: every operation
/// holds the table lock for its full read-modify-write, so concurrent
/// adjustments never lose updates.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: Mutex<Vec<User>>,
}

impl InMemoryUserRepository {
    /// Insert rows in order, assigning ids from 1 upwards.
    pub fn seed(&self, rows: &[(&str, i32)]) {
        let mut table = self.table.lock().expect("table lock");
        for (email, value) in rows {
            let id = table.len() as i32 + 1;
            table.push(User {
                id,
                email: (*email).to_owned(),
                value: *value,
            });
        }
    }

    /// Current `(id, value)` pairs, ascending by id.
    pub fn snapshot(&self) -> Vec<(i32, i32)> {
        let table = self.table.lock().expect("table lock");
        table.iter().map(|user| (user.id, user.value)).collect()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, email: &str, value: i32) -> Result<User, UserPersistenceError> {
        let mut table = self.table.lock().expect("table lock");
        let id = table.len() as i32 + 1;
        let user = User {
            id,
            email: email.to_owned(),
            value,
        };
        table.push(user.clone());
        Ok(user)
    }

    async fn set_value(
        &self,
        id: i32,
        value: i32,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut table = self.table.lock().expect("table lock");
        Ok(table.iter_mut().find(|user| user.id == id).map(|user| {
            user.value = value;
            user.clone()
        }))
    }

    async fn adjust_value(
        &self,
        id: i32,
        delta: i32,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut table = self.table.lock().expect("table lock");
        Ok(table.iter_mut().find(|user| user.id == id).map(|user| {
            user.value += delta;
            user.clone()
        }))
    }

    async fn list_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        let mut users = self.table.lock().expect("table lock").clone();
        users.sort_by_key(|user| user.id);
        Ok(users)
    }
}

/// Handler state wired to an in-memory repository and the fixture corpus.
///
/// Returns the repository handle alongside the state so tests can seed and
/// inspect rows directly.
pub fn http_state() -> (web::Data<HttpState>, Arc<InMemoryUserRepository>) {
    let repository = Arc::new(InMemoryUserRepository::default());
    let generator = EmailGenerator::new(Arc::new(fixture_corpus()));
    let state = web::Data::new(HttpState::new(repository.clone(), generator));
    (state, repository)
}
