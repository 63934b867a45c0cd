//! The `RuleStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `tariff-store-sqlite`).
//! Higher layers (`tariff-api`, `tariff-cli`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  error::Result,
  quote::FeeQuote,
  rule::{FeeRule, NewRule},
};

/// Abstraction over a delivery-fee rule store backend.
///
/// At most one rule exists per location, compared byte-wise; the backend is
/// the sole authority on that uniqueness. Every method is a single unit of
/// work against storage — no queues, no caches, no background activity.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait RuleStore: Send + Sync {
  // ── Writes ────────────────────────────────────────────────────────────

  /// Validate and persist a new rule, returning it with its store-assigned
  /// id.
  ///
  /// Fails with [`Error::DuplicateLocation`](crate::Error::DuplicateLocation)
  /// if a rule for the location already exists; storage is left unchanged.
  fn add_rule(
    &self,
    rule: NewRule,
  ) -> impl Future<Output = Result<FeeRule>> + Send + '_;

  /// Validate and replace every field of the rule with the given id,
  /// returning the updated rule.
  ///
  /// The replacement is all-or-nothing: on
  /// [`Error::RuleNotFound`](crate::Error::RuleNotFound) or
  /// [`Error::DuplicateLocation`](crate::Error::DuplicateLocation) (renaming
  /// onto another rule's location) no field changes.
  fn update_rule(
    &self,
    id: i64,
    rule: NewRule,
  ) -> impl Future<Output = Result<FeeRule>> + Send + '_;

  /// Delete the rule with the given id. The id is never reused.
  ///
  /// Fails with [`Error::RuleNotFound`](crate::Error::RuleNotFound) if no
  /// such rule exists.
  fn delete_rule(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<()>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  /// Retrieve a rule by id. Returns `None` if not found.
  fn get_rule(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<FeeRule>>> + Send + '_;

  /// List rules in creation order.
  ///
  /// With a non-empty `search`, only rules whose location or zone contains
  /// it as a case-sensitive substring are returned. The text is matched
  /// literally — there is no wildcard language. An empty match set is not an
  /// error.
  fn list_rules<'a>(
    &'a self,
    search: Option<&'a str>,
  ) -> impl Future<Output = Result<Vec<FeeRule>>> + Send + 'a;

  /// Every location that has a rule, in alphabetical order.
  fn locations(&self) -> impl Future<Output = Result<Vec<String>>> + Send + '_;

  /// Compute the fee outcome for an order amount in a location.
  ///
  /// An unknown location yields [`FeeQuote::LocationNotFound`] — an
  /// outcome, not an error.
  fn quote_fee<'a>(
    &'a self,
    location: &'a str,
    order_amount: f64,
  ) -> impl Future<Output = Result<FeeQuote>> + Send + 'a;
}
