//! Server configuration resolved from the process environment.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::domain::EmailGenerator;
use crate::outbound::persistence::DbPool;

/// Default listen address when `BIND_ADDR` is unset.
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised while reading environment settings.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    /// The store connection string is missing.
    #[error("DATABASE_URL must be set to the store connection string")]
    MissingDatabaseUrl,
    /// The listen address could not be parsed.
    #[error("BIND_ADDR {value:?} is not a valid socket address: {source}")]
    InvalidBindAddr {
        /// The rejected value, verbatim.
        value: String,
        /// Underlying parse failure.
        #[source]
        source: std::net::AddrParseError,
    },
}

/// Environment-derived application settings.
#[derive(Debug, Clone)]
pub struct AppSettings {
    /// Store connection string (`DATABASE_URL`).
    pub database_url: String,
    /// Listen address (`BIND_ADDR`, default `0.0.0.0:8080`).
    pub bind_addr: SocketAddr,
    /// Word corpus resource path (`WORDS_FILE`).
    pub words_file: PathBuf,
    /// Domain corpus resource path (`DOMAINS_FILE`).
    pub domains_file: PathBuf,
}

impl AppSettings {
    /// Read settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when `DATABASE_URL` is absent or
    /// `BIND_ADDR` does not parse as a socket address.
    pub fn from_env() -> Result<Self, SettingsError> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| SettingsError::MissingDatabaseUrl)?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_owned());
        let bind_addr = bind_addr
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: bind_addr.clone(),
                source,
            })?;

        let words_file = env::var("WORDS_FILE")
            .map_or_else(|_| PathBuf::from("resources/words.txt"), PathBuf::from);
        let domains_file = env::var("DOMAINS_FILE")
            .map_or_else(|_| PathBuf::from("resources/domains.txt"), PathBuf::from);

        Ok(Self {
            database_url,
            bind_addr,
            words_file,
            domains_file,
        })
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
    pub(crate) generator: EmailGenerator,
}

impl ServerConfig {
    /// Construct a server configuration from resolved dependencies.
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool, generator: EmailGenerator) -> Self {
        Self {
            bind_addr,
            db_pool,
            generator,
        }
    }

    /// Return the socket address the server will bind to.
    pub fn bind_addr(&self) -> SocketAddr {
        self.bind_addr
    }
}
