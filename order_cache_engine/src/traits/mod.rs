//! # Durable storage contracts
//!
//! The order cache treats the relational store as an append-only key/value service. The [`OrderStore`] trait is the
//! whole contract: append a serialized order under its id, and enumerate everything that was ever appended.
//!
//! Backends (e.g. [`crate::SqliteDatabase`]) implement this trait. There are no update or delete operations; a
//! newer version of an order is simply another row.
mod order_store;

pub use order_store::{OrderStore, StoreError};
