//! `SqliteDatabase` is a concrete implementation of an order store backend.
//!
//! Unsurprisingly, it uses SQLite as the backend and implements the [`OrderStore`] trait defined in the [`traits`]
//! module.
//!
//! [`traits`]: crate::traits
use std::fmt::Debug;

use async_trait::async_trait;
use log::*;
use sqlx::{migrate, SqlitePool};

use super::db::{new_pool, orders};
use crate::{
    db_types::{OrderId, StoredOrder},
    traits::{OrderStore, StoreError},
};

#[derive(Clone)]
pub struct SqliteDatabase {
    url: String,
    pool: SqlitePool,
}

impl Debug for SqliteDatabase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SqliteDatabase ({:?})", self.pool)
    }
}

impl SqliteDatabase {
    /// Creates a new database API object
    pub async fn new_with_url(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let pool = new_pool(url, max_connections).await?;
        Ok(Self { url: url.to_string(), pool })
    }

    pub fn url(&self) -> &str {
        self.url.as_str()
    }

    /// Returns a reference to the database connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Creates the `orders` table if it does not exist yet.
    pub async fn migrate(&self) -> Result<(), StoreError> {
        migrate!("./src/sqlite/migrations").run(&self.pool).await?;
        debug!("🗃️ Database migrations complete");
        Ok(())
    }

    /// The number of rows stored for `order_id`.
    pub async fn row_count_for_order(&self, order_id: &OrderId) -> Result<i64, StoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::count_rows_for_order(order_id, &mut conn).await
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl OrderStore for SqliteDatabase {
    async fn insert(&self, order_id: &OrderId, payload: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.acquire().await?;
        let row_id = orders::insert_order(order_id, payload, &mut conn).await?;
        debug!("🗃️ Order {order_id} has been saved in the DB with id {row_id}");
        Ok(())
    }

    async fn enumerate(&self) -> Result<Vec<StoredOrder>, StoreError> {
        let mut conn = self.pool.acquire().await?;
        orders::fetch_all_orders(&mut conn).await
    }
}
