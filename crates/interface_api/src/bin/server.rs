//! Quote Rating - API Server Binary
//!
//! # Usage
//!
//! ```bash
//! # In-memory store, default port
//! cargo run --bin quote-api
//!
//! # PostgreSQL store
//! API_DATABASE_URL=postgres://... cargo run --bin quote-api
//! ```
//!
//! # Environment Variables
//!
//! * `API_HOST` - Server host (default: 0.0.0.0)
//! * `API_PORT` - Server port (default: 8080)
//! * `API_DATABASE_URL` or `DATABASE_URL` - PostgreSQL connection string (default: in-memory store)
//! * `API_LOG_LEVEL` - Log level when `RUST_LOG` is unset (default: info)
//! * `API_QUOTE_ID_MAX_ATTEMPTS` - Quote number draws per creation (default: 8)
//! * `API_RATE_TABLE_PATH` - JSON rate table file (default: built-in table)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use domain_quote::{InMemoryQuoteStore, QuoteStore};
use infra_db::{create_pool, run_migrations, DatabaseConfig, PostgresQuoteStore};
use interface_api::{build_service, config::ApiConfig, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let mut config = ApiConfig::from_env().context("invalid API_* configuration")?;
    if config.database_url.is_none() {
        config.database_url = std::env::var("DATABASE_URL").ok();
    }

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting quote rating API server"
    );

    let store = create_store(&config).await?;
    let service = build_service(store, &config).context("failed to load rate table")?;
    let app = create_router(Arc::new(service), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber; `RUST_LOG` wins over the configured level
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Connects to PostgreSQL and migrates it, or falls back to the in-memory store
async fn create_store(config: &ApiConfig) -> anyhow::Result<Arc<dyn QuoteStore>> {
    match &config.database_url {
        Some(url) => {
            tracing::info!("Connecting to database");
            let pool = create_pool(DatabaseConfig::new(url))
                .await
                .context("failed to connect to database")?;
            run_migrations(&pool)
                .await
                .context("failed to run database migrations")?;
            Ok(Arc::new(PostgresQuoteStore::new(pool)))
        }
        None => {
            tracing::warn!("No database configured; quotes are kept in memory only");
            Ok(Arc::new(InMemoryQuoteStore::new()))
        }
    }
}

/// Waits for Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
