//! # Order cache public API
//!
//! The `oc_api` module exposes the programmatic API of the order cache. Every API object is built from a shared
//! [`OrderCache`](crate::OrderCache) handle and, where durable storage is involved, a backend implementing
//! [`OrderStore`](crate::traits::OrderStore).
//!
//! * [`ingestion_api`] turns inbound payloads into cache state and durable state.
//! * [`recovery_api`] rebuilds the cache from the durable store at startup.
//! * [`query_api`] serves lookups by order id.
//!
//! ```rust,ignore
//! use order_cache_engine::{IngestionApi, OrderCache, QueryApi, RecoveryApi, SqliteDatabase};
//! let db = SqliteDatabase::new_with_url("sqlite://data/order_cache.db", 5).await?;
//! let cache = OrderCache::new();
//! RecoveryApi::new(cache.clone(), db.clone()).restore().await;
//! let ingest = IngestionApi::new(cache.clone(), db);
//! ingest.process(payload).await;
//! let order = QueryApi::new(cache).lookup(Some("abc123"))?;
//! ```

pub mod errors;
pub mod ingestion_api;
pub mod query_api;
pub mod recovery_api;
