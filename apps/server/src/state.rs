//! Shared application state

use crate::config::{Config, StoreBackend};
use crate::db::{InMemoryStore, PostgresStore, Store};
use anyhow::Context;
use std::sync::Arc;

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn Store>,
}

impl AppState {
    /// Build state for the configured backend.
    ///
    /// Fails when the database cannot be reached; the caller treats this as
    /// fatal.
    pub async fn new(config: Config) -> anyhow::Result<Self> {
        let store: Arc<dyn Store> = match config.store.backend {
            StoreBackend::Postgres => {
                let store = PostgresStore::connect(&config.database)
                    .await
                    .context("Failed to connect to the database")?;
                if config.database.run_migrations {
                    store
                        .run_migrations()
                        .await
                        .context("Failed to run database migrations")?;
                }
                Arc::new(store)
            }
            StoreBackend::Memory => {
                tracing::warn!("Using the in-memory store; data is lost on shutdown");
                Arc::new(InMemoryStore::new())
            }
        };

        Ok(Self::with_store(config, store))
    }

    /// Build state around an already constructed store.
    pub fn with_store(config: Config, store: Arc<dyn Store>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
