//! JSON REST API for the Tariff delivery-fee store.
//!
//! Exposes an axum [`Router`] backed by any [`tariff_core::store::RuleStore`].
//! Auth, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", tariff_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod quote;
pub mod rules;

use std::sync::Arc;

use axum::{Router, routing::get};
use tariff_core::store::RuleStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RuleStore + 'static,
{
  Router::new()
    // Rules
    .route("/rules", get(rules::list::<S>).post(rules::create::<S>))
    .route(
      "/rules/{id}",
      get(rules::get_one::<S>)
        .put(rules::update_one::<S>)
        .delete(rules::delete_one::<S>),
    )
    // Lookups
    .route("/locations", get(rules::locations::<S>))
    .route("/quote", get(quote::handler::<S>))
    .with_state(store)
}

// ─── Integration tests ────────────────────────────────────────────────────────
