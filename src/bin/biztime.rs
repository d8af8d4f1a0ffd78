//! BizTime server
//!
//! ```bash
//! cargo run --bin biztime
//! BIZTIME_STORAGE=postgres DATABASE_URL=postgresql:///biztime \
//!     cargo run --features postgres --bin biztime
//! ```

use anyhow::Result;
use biztime::config::{AppConfig, StorageKind};
use biztime::core::BizStore;
use biztime::server::ServerBuilder;
use biztime::storage::InMemoryStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(
            config
                .log_filter
                .as_deref()
                .unwrap_or("biztime=info,tower_http=info"),
        )?,
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = build_store(&config).await?;

    ServerBuilder::new()
        .with_store_arc(store)
        .serve(&config.bind_address())
        .await
}

async fn build_store(config: &AppConfig) -> Result<Arc<dyn BizStore>> {
    match config.storage {
        StorageKind::InMemory => {
            tracing::info!("using in-memory storage");
            Ok(Arc::new(InMemoryStore::new()))
        }
        #[cfg(feature = "postgres")]
        StorageKind::Postgres => {
            use biztime::storage::{PostgresStore, postgres};

            tracing::info!("connecting to PostgreSQL");
            let pool =
                postgres::connect(&config.database.url, config.database.max_connections).await?;
            Ok(Arc::new(PostgresStore::new(pool)))
        }
        #[cfg(not(feature = "postgres"))]
        StorageKind::Postgres => {
            anyhow::bail!("storage backend `postgres` requires the `postgres` feature")
        }
    }
}
