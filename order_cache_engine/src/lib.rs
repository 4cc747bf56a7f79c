//! Order Cache Engine
//!
//! A write-behind, read-through cache for order records. Orders arrive as raw payloads on a message stream, are
//! decoded and placed in an in-memory index, and are then mirrored into a durable store. Reads are served from memory
//! only.
//!
//! The library is divided into these main sections:
//! 1. The order model and its canonical JSON encoding ([`mod@db_types`]).
//! 2. The in-memory index, [`OrderCache`]. It is the single source of truth for reads.
//! 3. Durable storage ([`mod@traits`]). The store is an append-only log of `(order_id, payload)` rows. SQLite is the
//!    supported backend; [`MemoryStore`] is a volatile stand-in for tests.
//! 4. The public API ([`mod@oc_api`]): the ingestion pipeline, the startup recovery loader and the query API.
//! 5. The inbound message stream and the supervised worker that drains it ([`mod@stream`]).
//!
//! Visibility rules: an ingested order is readable as soon as it is in the cache, which happens before the durable
//! write starts. Conflicting versions of one order resolve as last-write-wins, both during ingestion and recovery.
mod cache;
mod memory_store;

pub mod db_types;
pub mod oc_api;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod stream;
pub mod traits;

#[cfg(any(feature = "test_utils", test))]
pub mod test_utils;

pub use cache::OrderCache;
pub use memory_store::MemoryStore;
pub use oc_api::{
    errors::QueryError,
    ingestion_api::{IngestOutcome, IngestionApi},
    query_api::{IdFormat, QueryApi},
    recovery_api::{RecoveryApi, RecoveryReport},
};
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteDatabase;
pub use stream::{message_channel, IngestionWorker, MessagePublisher, MessageStream, WorkerHandle};
