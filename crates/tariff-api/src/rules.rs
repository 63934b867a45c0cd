//! Handlers for `/rules` and `/locations` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET` | `/rules` | Optional `?search=<substring>` |
//! | `POST` | `/rules` | Body: [`NewRule`] JSON; 201 + stored rule |
//! | `GET` | `/rules/:id` | 404 if not found |
//! | `PUT` | `/rules/:id` | Replaces every field |
//! | `DELETE` | `/rules/:id` | 204; 404 if not found |
//! | `GET` | `/locations` | All locations, alphabetical |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  http::StatusCode,
  response::IntoResponse,
};
use serde::Deserialize;
use tariff_core::{
  rule::{FeeRule, NewRule},
  store::RuleStore,
};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Case-sensitive substring matched against location and zone.
  pub search: Option<String>,
}

/// `GET /rules[?search=<substring>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<FeeRule>>, ApiError>
where
  S: RuleStore,
{
  let rules = store.list_rules(params.search.as_deref()).await?;
  Ok(Json(rules))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /rules` — body: [`NewRule`] as JSON.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<NewRule>,
) -> Result<impl IntoResponse, ApiError>
where
  S: RuleStore,
{
  let rule = store.add_rule(body).await?;
  Ok((StatusCode::CREATED, Json(rule)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /rules/:id`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<Json<FeeRule>, ApiError>
where
  S: RuleStore,
{
  let rule = store
    .get_rule(id)
    .await?
    .ok_or_else(|| ApiError::NotFound(format!("rule {id} not found")))?;
  Ok(Json(rule))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /rules/:id` — body: [`NewRule`] as JSON; replaces every field.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
  Json(body): Json<NewRule>,
) -> Result<Json<FeeRule>, ApiError>
where
  S: RuleStore,
{
  let rule = store.update_rule(id, body).await?;
  Ok(Json(rule))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /rules/:id`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: RuleStore,
{
  store.delete_rule(id).await?;
  Ok(StatusCode::NO_CONTENT)
}

// ─── Locations ────────────────────────────────────────────────────────────────

/// `GET /locations`
pub async fn locations<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<String>>, ApiError>
where
  S: RuleStore,
{
  let locations = store.locations().await?;
  Ok(Json(locations))
}
