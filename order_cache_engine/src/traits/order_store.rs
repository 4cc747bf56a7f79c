use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;

use crate::db_types::{OrderId, StoredOrder};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database connection error: {0}")]
    DriverError(#[from] sqlx::Error),
    #[error("Could not run database migrations: {0}")]
    MigrationError(#[from] sqlx::migrate::MigrateError),
    #[error("Database query error: {0}")]
    QueryError(String),
}

/// Persistence of `(order_id, payload)` pairs.
///
/// Implementations are shared between concurrently running ingestion tasks, so they must be `Send + Sync` and every
/// call must be independent of the others.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Appends a row. Uniqueness of `order_id` is not enforced; storing the same id twice produces two rows.
    async fn insert(&self, order_id: &OrderId, payload: &str) -> Result<(), StoreError>;

    /// Returns every stored row, in the order the backend chooses to enumerate them.
    async fn enumerate(&self) -> Result<Vec<StoredOrder>, StoreError>;
}

#[async_trait]
impl<S: OrderStore + ?Sized> OrderStore for Arc<S> {
    async fn insert(&self, order_id: &OrderId, payload: &str) -> Result<(), StoreError> {
        (**self).insert(order_id, payload).await
    }

    async fn enumerate(&self) -> Result<Vec<StoredOrder>, StoreError> {
        (**self).enumerate().await
    }
}
