//! SQLite backend for the Tariff delivery-fee store.
//!
//! Wraps [`tokio_rusqlite`] so all database access runs on a dedicated thread
//! without blocking the async runtime.

mod schema;
mod store;

pub use store::SqliteStore;
