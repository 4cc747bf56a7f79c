//! In-memory order index
//!
//! [`OrderCache`] is the single source of truth for reads. It is a cheap, cloneable handle around one shared map, so
//! the ingestion pipeline, the recovery loader and the query API all hold the same instance.
//!
//! A single read-write lock guards the whole map. Readers proceed concurrently; a `put` excludes everyone else for the
//! duration of one map insert. Orders are stored behind an `Arc` and replaced whole, so a reader always sees a complete
//! order, either the one before a replacement or the one after it.
use std::{collections::HashMap, fmt::Debug, sync::Arc};

use log::*;
use parking_lot::RwLock;

use crate::db_types::{Order, OrderId};

#[derive(Clone, Default)]
pub struct OrderCache {
    orders: Arc<RwLock<HashMap<OrderId, Arc<Order>>>>,
}

impl Debug for OrderCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderCache").field("orders", &self.len()).finish()
    }
}

impl OrderCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the order, replacing any previous version with the same `order_uid`. Last write wins.
    pub fn put(&self, order: Order) {
        let order_id = order.order_uid.clone();
        let order = Arc::new(order);
        let previous = self.orders.write().insert(order_id.clone(), order);
        if previous.is_some() {
            trace!("🧠️ Order {order_id} replaced in cache");
        } else {
            trace!("🧠️ Order {order_id} added to cache");
        }
    }

    pub fn get(&self, order_id: &OrderId) -> Option<Arc<Order>> {
        self.orders.read().get(order_id).cloned()
    }

    pub fn contains(&self, order_id: &OrderId) -> bool {
        self.orders.read().contains_key(order_id)
    }

    pub fn len(&self) -> usize {
        self.orders.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.read().is_empty()
    }
}
