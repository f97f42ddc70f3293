//! Data access for the stockroom `products` table.
//!
//! [`ProductGateway`] is the only component that issues statements against
//! the table; every front end goes through it. The gateway talks to a
//! [`ProductStore`], which is PostgreSQL in production and an in-memory map
//! in tests or when `DATABASE_URL=memory`.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

pub mod config;
pub mod error;
pub mod gateway;
pub mod store;

pub use config::DbConfig;
pub use error::StoreError;
pub use gateway::ProductGateway;
pub use store::memory::MemoryProductStore;
pub use store::postgres::PgProductStore;
pub use store::ProductStore;

pub type DbPool = sqlx::PgPool;

/// `DATABASE_URL` value that selects the in-memory store.
pub const MEMORY_URL: &str = "memory";

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str, max_connections: u32) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Build the process-wide store from configuration.
///
/// Call once at start-up and hand the result to [`ProductGateway::new`].
pub async fn connect(config: &DbConfig) -> Result<Arc<dyn ProductStore>, StoreError> {
    if config.database_url == MEMORY_URL {
        tracing::info!("Using in-memory product store");
        return Ok(Arc::new(MemoryProductStore::new()));
    }

    let pool = create_pool(&config.database_url, config.max_connections).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool created"
    );
    Ok(Arc::new(PgProductStore::new(pool)))
}
