//! Handler for `GET /quote`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
};
use serde::Deserialize;
use tariff_core::{quote::FeeQuote, store::RuleStore};

use crate::error::ApiError;

#[derive(Debug, Deserialize)]
pub struct QuoteParams {
  /// Exact location name, matched case-sensitively.
  pub location:     String,
  pub order_amount: f64,
}

/// `GET /quote?location=<location>&order_amount=<amount>`
///
/// An unknown location is a regular `location_not_found` outcome, not an
/// HTTP error.
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<QuoteParams>,
) -> Result<Json<FeeQuote>, ApiError>
where
  S: RuleStore,
{
  let quote = store
    .quote_fee(&params.location, params.order_amount)
    .await?;
  Ok(Json(quote))
}
