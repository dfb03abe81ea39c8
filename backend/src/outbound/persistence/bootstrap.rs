//! Embedded schema migrations applied at startup.
//!
//! The Diesel migration harness is synchronous, so pending migrations run
//! on a blocking task through the async connection wrapper. The operation
//! is idempotent: already-applied migrations are skipped, and startup
//! aborts on failure before the listener binds.

use diesel::Connection;
use diesel_async::AsyncPgConnection;
use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled into the binary from `migrations/`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Errors raised while preparing the schema.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    /// Connecting to the database or applying a migration failed.
    #[error("schema migration failed: {0}")]
    Apply(String),
    /// The blocking migration task was cancelled or panicked.
    #[error("schema migration task failed: {0}")]
    Task(String),
}

/// Apply pending migrations, creating the `users` table when absent.
///
/// # Errors
///
/// Returns [`MigrationError`] when the database is unreachable or a
/// migration cannot be applied; the caller is expected to abort startup.
pub async fn run_migrations(database_url: &str) -> Result<(), MigrationError> {
    let database_url = database_url.to_owned();

    tokio::task::spawn_blocking(move || {
        let mut conn = AsyncConnectionWrapper::<AsyncPgConnection>::establish(&database_url)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;

        let applied = conn
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply(err.to_string()))?;

        for version in applied {
            info!(%version, "applied migration");
        }
        Ok(())
    })
    .await
    .map_err(|err| MigrationError::Task(err.to_string()))?
}
