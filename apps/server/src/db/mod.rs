//! Persistence layer - the store interface and its backends

pub mod memory;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryStore;
pub use postgres::PostgresStore;
pub use traits::Store;

use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// A schema constraint rejected the statement.
    #[error("Constraint violation: {0}")]
    Constraint(String),
}
