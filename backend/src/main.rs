//! Kronos entry-point: loads settings, prepares persistence, and serves the
//! REST API.

mod server;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use kronos::inbound::http::health::HealthState;
use kronos::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
#[cfg(feature = "metrics")]
use server::make_metrics;
use server::{ServerConfig, ServerSettings, create_server};

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

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings
        .bind_addr()
        .map_err(|e| std::io::Error::other(format!("invalid bind address: {e}")))?;

    let mut config = ServerConfig::new(bind_addr);
    match settings.database_url() {
        Some(url) => {
            if settings.skip_migrations {
                info!("skipping database migrations");
            } else {
                run_pending_migrations(url).await.map_err(std::io::Error::other)?;
            }
            let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
            let pool = DbPool::new(pool_config)
                .await
                .map_err(std::io::Error::other)?;
            config = config.with_db_pool(pool);
        }
        None => warn!("no database configured; data is kept in memory"),
    }

    #[cfg(feature = "metrics")]
    let config = config.with_metrics(Some(make_metrics()?));

    let health_state = web::Data::new(HealthState::new());
    create_server(health_state, config)?.await
}
