use std::fmt::Debug;

use log::*;

use crate::{cache::OrderCache, db_types::Order, traits::OrderStore};

/// Summary of a recovery run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecoveryReport {
    /// Rows returned by the store
    pub rows: usize,
    /// Rows decoded and applied to the cache
    pub restored: usize,
    /// Rows that could not be decoded
    pub skipped: usize,
    /// False if the store could not be enumerated at all
    pub store_reachable: bool,
}

/// `RecoveryApi` is the recovery loader: it replays every stored row into the cache before ingestion starts.
///
/// Rows are applied in the order the store enumerates them, with the cache's usual last-write-wins rule. If the
/// store holds several rows for one order id, the cache ends up with whichever was enumerated last.
pub struct RecoveryApi<S> {
    cache: OrderCache,
    store: S,
}

impl<S> Debug for RecoveryApi<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RecoveryApi ({:?})", self.cache)
    }
}

impl<S> RecoveryApi<S> {
    pub fn new(cache: OrderCache, store: S) -> Self {
        Self { cache, store }
    }
}

impl<S> RecoveryApi<S>
where S: OrderStore
{
    /// Populates the cache from the store. This is best effort and never fails:
    /// * rows that do not decode are logged and skipped;
    /// * if the store cannot be enumerated at all, the cache is left as it is and the failure is logged.
    pub async fn restore(&self) -> RecoveryReport {
        info!("♻️ Restoring order cache from the durable store");
        let rows = match self.store.enumerate().await {
            Ok(rows) => rows,
            Err(e) => {
                error!("♻️ Could not read stored orders. Continuing with an empty cache. {e}");
                return RecoveryReport::default();
            },
        };
        let mut report = RecoveryReport { rows: rows.len(), store_reachable: true, ..Default::default() };
        for row in rows {
            match Order::from_payload(row.payload.as_bytes()) {
                Ok(order) => {
                    if order.order_uid != row.order_id {
                        warn!(
                            "♻️ Stored row for {} contains order {}. Using the id from the payload.",
                            row.order_id, order.order_uid
                        );
                    }
                    self.cache.put(order);
                    report.restored += 1;
                },
                Err(e) => {
                    warn!("♻️ Skipping stored row for order {}. {e}", row.order_id);
                    report.skipped += 1;
                },
            }
        }
        info!(
            "♻️ Cache restored. {} rows read, {} applied, {} skipped. {} orders cached.",
            report.rows,
            report.restored,
            report.skipped,
            self.cache.len()
        );
        report
    }
}
