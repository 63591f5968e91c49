use anyhow::Context;
use clap::Parser;
use portkey_cache::{MokaMappingCache, RedisMappingCache};
use portkey_core::{MappingCache, MappingStore};
use portkey_gateway::cli::{CacheBackendArg, Cli, StorageBackendArg};
use portkey_gateway::{App, AppState};
use portkey_generator::HashGenerator;
use portkey_service::{MappingService, Shortener};
use portkey_storage::{InMemoryStore, MySqlStore};
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Cli::try_parse()?;

    info!(
        listen_addr = %config.listen_addr,
        storage_backend = %config.storage,
        cache_backend = %config.cache,
        cache_ttl_secs = config.cache_ttl_secs,
        "starting portkey gateway"
    );

    let ttl = Duration::from_secs(config.cache_ttl_secs);

    let shortener: Arc<dyn Shortener> = match config.storage {
        StorageBackendArg::InMemory => {
            build_with_cache(InMemoryStore::new(), &config, ttl).await?
        }
        StorageBackendArg::Mysql => {
            let dsn = config
                .mysql_dsn
                .as_deref()
                .context("mysql dsn is required when storage backend is mysql")?;
            let store = MySqlStore::connect(dsn)
                .await
                .context("failed to connect to MySQL")?;
            store.migrate().await.context("failed to run migrations")?;
            build_with_cache(store, &config, ttl).await?
        }
    };

    let state = AppState::new(shortener, config.base_url.clone());
    let router = App::router(state);

    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .context("failed to bind listen address")?;
    info!(listen_addr = %listener.local_addr()?, "gateway listening");

    axum::serve(listener, router).await?;
    Ok(())
}

async fn build_with_cache<S: MappingStore>(
    store: S,
    config: &Cli,
    ttl: Duration,
) -> anyhow::Result<Arc<dyn Shortener>> {
    match config.cache {
        CacheBackendArg::InMemory => {
            let cache = MokaMappingCache::with_ttl(10_000, ttl);
            Ok(build_service(store, cache, ttl))
        }
        CacheBackendArg::Redis => {
            let url = config
                .redis_url
                .as_deref()
                .context("redis url is required when cache backend is redis")?;
            let client = redis::Client::open(url).context("invalid redis url")?;
            let conn = client
                .get_multiplexed_async_connection()
                .await
                .context("failed to connect to Redis")?;
            Ok(build_service(store, RedisMappingCache::new(conn), ttl))
        }
    }
}

fn build_service<S: MappingStore, C: MappingCache>(
    store: S,
    cache: C,
    ttl: Duration,
) -> Arc<dyn Shortener> {
    Arc::new(MappingService::new(store, cache, HashGenerator::new()).with_cache_ttl(ttl))
}
