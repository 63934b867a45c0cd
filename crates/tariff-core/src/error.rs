//! Error types for `tariff-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("rule not found: {0}")]
  RuleNotFound(i64),

  #[error("a rule for location {0:?} already exists")]
  DuplicateLocation(String),

  #[error("location must not be blank")]
  BlankLocation,

  #[error("{field} must be a non-negative number, got {value}")]
  InvalidAmount { field: &'static str, value: f64 },

  #[error("storage error: {0}")]
  Storage(String),
}

impl Error {
  /// Wrap an engine-level failure the caller cannot act on.
  pub fn storage(err: impl std::fmt::Display) -> Self {
    Self::Storage(err.to_string())
  }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
