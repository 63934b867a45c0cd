//! Core types and trait definitions for the Tariff delivery-fee store.
//!
//! This crate is deliberately free of HTTP and database dependencies.
//! All other crates depend on it; it depends on nothing proprietary.

pub mod error;
pub mod quote;
pub mod rule;
pub mod store;

pub use error::{Error, Result};
