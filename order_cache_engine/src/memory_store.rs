use async_trait::async_trait;
use parking_lot::Mutex;

use crate::{
    db_types::{OrderId, StoredOrder},
    traits::{OrderStore, StoreError},
};

/// A volatile, append-only [`OrderStore`]. Rows are enumerated in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<StoredOrder>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that already holds `rows`, as if they had been inserted in that order.
    pub fn with_rows(rows: Vec<StoredOrder>) -> Self {
        Self { rows: Mutex::new(rows) }
    }

    pub fn rows(&self) -> Vec<StoredOrder> {
        self.rows.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.lock().is_empty()
    }
}

#[async_trait]
impl OrderStore for MemoryStore {
    async fn insert(&self, order_id: &OrderId, payload: &str) -> Result<(), StoreError> {
        self.rows.lock().push(StoredOrder::new(order_id.clone(), payload));
        Ok(())
    }

    async fn enumerate(&self) -> Result<Vec<StoredOrder>, StoreError> {
        Ok(self.rows())
    }
}
