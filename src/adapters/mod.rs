//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `http` - Axum router and handlers
//! - `memory` - Process-local activity store
//! - `postgres` - PostgreSQL activity store

pub mod http;
pub mod memory;
pub mod postgres;

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;

use crate::config::{DatabaseConfig, StoreBackend};
use crate::domain::foundation::DomainError;
use crate::ports::ActivityStore;

pub use memory::InMemoryActivityStore;
pub use postgres::PostgresActivityStore;

/// Opens the configured activity store.
///
/// For PostgreSQL this connects the pool and, when enabled, applies the
/// schema migrations before returning.
pub async fn connect_activity_store(
    config: &DatabaseConfig,
) -> Result<Arc<dyn ActivityStore>, DomainError> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory activity store");
            Ok(Arc::new(InMemoryActivityStore::new()))
        }
        StoreBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .min_connections(config.min_connections)
                .max_connections(config.max_connections)
                .acquire_timeout(config.acquire_timeout())
                .idle_timeout(config.idle_timeout())
                .max_lifetime(config.max_lifetime())
                .connect(&config.url)
                .await
                .map_err(|e| DomainError::database(format!("Failed to connect: {}", e)))?;

            let store = PostgresActivityStore::new(pool);
            if config.run_migrations {
                store.migrate().await?;
                tracing::info!("Database migrations applied");
            }

            tracing::info!(
                max_connections = config.max_connections,
                "Connected to PostgreSQL activity store"
            );
            Ok(Arc::new(store))
        }
    }
}
