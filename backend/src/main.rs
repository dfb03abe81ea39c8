//! Backend entry-point: configuration, corpus load, schema bootstrap, and
//! HTTP listener wiring.

use std::sync::Arc;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use backend::domain::{EmailGenerator, WordCorpus};
use backend::inbound::http::health::HealthState;
use backend::outbound::persistence::{DbPool, PoolConfig, run_migrations};
use backend::server::{AppSettings, ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::from_env().map_err(std::io::Error::other)?;

    // Corpus failures abort startup; a service running with an empty
    // corpus would fault on first use instead.
    let corpus = WordCorpus::load(&settings.words_file, &settings.domains_file)
        .map_err(std::io::Error::other)?;
    info!(
        words = corpus.words().len(),
        domains = corpus.domains().len(),
        "corpus loaded"
    );
    let generator = EmailGenerator::new(Arc::new(corpus));

    let pool = DbPool::new(PoolConfig::new(&settings.database_url))
        .await
        .map_err(std::io::Error::other)?;

    run_migrations(&settings.database_url)
        .await
        .map_err(std::io::Error::other)?;
    info!("schema ready");

    let health_state = web::Data::new(HealthState::new());
    let config = ServerConfig::new(settings.bind_addr, pool, generator);
    let server = create_server(health_state, config)?;
    info!("listening");
    server.await
}
