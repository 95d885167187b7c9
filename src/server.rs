//! HTTP server initialization and runtime setup.
//!
//! Wires the configured mapping store and cache into the allocator and runs
//! the Axum server until Ctrl-C.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::domain::repositories::MappingRepository;
use crate::infrastructure::cache::{CacheService, NullCache, RedisCache};
use crate::infrastructure::persistence::{InMemoryMappingRepository, PgMappingRepository};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Mapping store (PostgreSQL with migrations, or in-memory)
/// - Redis cache (or NullCache fallback)
/// - Axum HTTP server with graceful shutdown
///
/// # Errors
///
/// Returns an error if the database is unreachable after the configured
/// retries, migrations fail, or the listener cannot bind.
pub async fn run(config: Config) -> Result<()> {
    let repository = build_repository(&config).await?;
    let cache = build_cache(&config).await;
    let state = build_state(repository, cache, &config);

    let app = app_router(state);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Assembles the shared state from a store and a cache.
pub fn build_state(
    repository: Arc<dyn MappingRepository>,
    cache: Arc<dyn CacheService>,
    config: &Config,
) -> AppState {
    let shortener = ShortenerService::new(repository, config.base_url.clone())
        .with_max_attempts(config.code_max_attempts);

    AppState::new(Arc::new(shortener), cache)
}

/// Selects the mapping store: PostgreSQL when a database URL is configured,
/// otherwise the in-memory store.
pub async fn build_repository(config: &Config) -> Result<Arc<dyn MappingRepository>> {
    let Some(ref database_url) = config.database_url else {
        tracing::warn!("DATABASE_URL not set, using in-memory store");
        return Ok(Arc::new(InMemoryMappingRepository::new()));
    };

    let pool = connect_pool(database_url, config).await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Migrations applied");

    Ok(Arc::new(PgMappingRepository::new(Arc::new(pool))))
}

/// Opens a PostgreSQL pool, retrying with exponential backoff.
pub async fn connect_pool(database_url: &str, config: &Config) -> Result<PgPool> {
    let options = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime));

    let strategy = ExponentialBackoff::from_millis(10)
        .factor(50)
        .max_delay(Duration::from_secs(10))
        .map(jitter)
        .take(config.db_connect_retries);

    Retry::spawn(strategy, || {
        let options = options.clone();
        async move {
            options.connect(database_url).await.inspect_err(|e| {
                tracing::warn!(error = %e, "Database connection attempt failed");
            })
        }
    })
    .await
    .context("Failed to connect to database")
}

/// Connects to Redis when configured; falls back to [`NullCache`].
pub async fn build_cache(config: &Config) -> Arc<dyn CacheService> {
    let Some(ref redis_url) = config.redis_url else {
        tracing::info!("Cache disabled (NullCache)");
        return Arc::new(NullCache::new());
    };

    match RedisCache::connect(redis_url, config.cache_ttl_seconds).await {
        Ok(redis) => {
            tracing::info!("Cache enabled (Redis)");
            Arc::new(redis)
        }
        Err(e) => {
            tracing::warn!("Failed to connect to Redis: {}. Using NullCache.", e);
            Arc::new(NullCache::new())
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
