use std::fmt::Debug;

use log::*;

use crate::{cache::OrderCache, db_types::Order, traits::OrderStore};

/// What happened to a single inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestOutcome {
    /// The payload could not be decoded and was dropped.
    Rejected,
    /// The order is visible in the cache, but could not be written to the durable store.
    Cached,
    /// The order is visible in the cache and has been written to the durable store.
    Persisted,
}

/// `IngestionApi` is the ingestion pipeline: decode, update the cache, then persist.
///
/// Each call to [`Self::process`] is independent. Many may run concurrently, and nothing orders them relative to each
/// other. If two versions of the same order are in flight at once, whichever reaches the cache last wins.
#[derive(Clone)]
pub struct IngestionApi<S> {
    cache: OrderCache,
    store: S,
}

impl<S> Debug for IngestionApi<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IngestionApi ({:?})", self.cache)
    }
}

impl<S> IngestionApi<S> {
    pub fn new(cache: OrderCache, store: S) -> Self {
        Self { cache, store }
    }

    pub fn cache(&self) -> &OrderCache {
        &self.cache
    }
}

impl<S> IngestionApi<S>
where S: OrderStore
{
    /// Handles one inbound payload to completion.
    ///
    /// 1. Decode. Undecodable payloads are logged and dropped.
    /// 2. Put the order in the cache. From here on it is visible to readers.
    /// 3. Re-encode and append to the durable store. Failures are logged; the cache keeps the new version regardless.
    ///
    /// Errors never propagate out of this method.
    pub async fn process(&self, payload: &[u8]) -> IngestOutcome {
        let order = match Order::from_payload(payload) {
            Ok(order) => order,
            Err(e) => {
                warn!("📬️ Dropping inbound message ({} bytes). {e}", payload.len());
                return IngestOutcome::Rejected;
            },
        };
        let order_id = order.order_uid.clone();
        trace!("📬️ Decoded order {order_id} with {} items", order.items.len());
        // Encode before handing the order over to the cache, so the persisted row matches what readers see
        let encoded = order.to_payload();
        self.cache.put(order);
        debug!("📬️ Order {order_id} is now visible in the cache");
        let encoded = match encoded {
            Ok(s) => s,
            Err(e) => {
                error!("📬️ {e}. The order is cached but will not be persisted.");
                return IngestOutcome::Cached;
            },
        };
        match self.store.insert(&order_id, &encoded).await {
            Ok(()) => {
                debug!("📬️ Order {order_id} persisted");
                IngestOutcome::Persisted
            },
            Err(e) => {
                error!("📬️ Failed to persist order {order_id}. It remains cached, but will not survive a restart. {e}");
                IngestOutcome::Cached
            },
        }
    }
}
