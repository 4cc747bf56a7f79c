//! SQLite backend for the order store.
//!
//! [`SqliteDatabase`] implements [`crate::traits::OrderStore`] on top of a `sqlx` connection pool.
mod sqlite_impl;

pub mod db;
pub use sqlite_impl::SqliteDatabase;
