//! Rule records — one stored row mapping a location to its fee policy.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

// ─── Stored rule ─────────────────────────────────────────────────────────────

/// A persisted delivery-fee rule.
///
/// `id` is assigned by the store on insert and is never changed or reused
/// afterwards, even once the rule is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeeRule {
  pub id:                       i64,
  /// Business key. Unique across all rules, compared byte-wise
  /// (case-sensitive).
  pub location:                 String,
  /// Order amount below which the order does not qualify for paid delivery.
  pub min_order_amount:         f64,
  /// Flat fee charged when the order qualifies for paid delivery.
  pub delivery_charge:          f64,
  /// Order amount at or above which delivery is free. `None` means the rule
  /// never grants free delivery, no matter how large the order.
  pub amount_for_free_delivery: Option<f64>,
  /// Free-text grouping label; participates in search, nothing else.
  pub zone:                     Option<String>,
}

// ─── Input record ────────────────────────────────────────────────────────────

/// Input to [`crate::store::RuleStore::add_rule`] and
/// [`crate::store::RuleStore::update_rule`]. Update replaces every field, so
/// the same shape serves both.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewRule {
  pub location:                 String,
  pub min_order_amount:         f64,
  pub delivery_charge:          f64,
  #[serde(default)]
  pub amount_for_free_delivery: Option<f64>,
  #[serde(default)]
  pub zone:                     Option<String>,
}

impl NewRule {
  /// Check the field-level requirements before anything reaches storage:
  /// a non-blank location and finite, non-negative amounts. NaN is rejected
  /// so that fee comparisons stay total.
  pub fn validate(&self) -> Result<()> {
    if self.location.trim().is_empty() {
      return Err(Error::BlankLocation);
    }
    check_amount("min_order_amount", self.min_order_amount)?;
    check_amount("delivery_charge", self.delivery_charge)?;
    if let Some(threshold) = self.amount_for_free_delivery {
      check_amount("amount_for_free_delivery", threshold)?;
    }
    Ok(())
  }

  /// Combine with a store-assigned id into a persisted [`FeeRule`].
  pub fn into_rule(self, id: i64) -> FeeRule {
    FeeRule {
      id,
      location:                 self.location,
      min_order_amount:         self.min_order_amount,
      delivery_charge:          self.delivery_charge,
      amount_for_free_delivery: self.amount_for_free_delivery,
      zone:                     self.zone,
    }
  }
}

fn check_amount(field: &'static str, value: f64) -> Result<()> {
  if !value.is_finite() || value < 0.0 {
    return Err(Error::InvalidAmount { field, value });
  }
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn rule() -> NewRule {
    NewRule {
      location:                 "Downtown".into(),
      min_order_amount:         50.0,
      delivery_charge:          10.0,
      amount_for_free_delivery: Some(200.0),
      zone:                     Some("A".into()),
    }
  }

  #[test]
  fn valid_rule_passes() {
    assert!(rule().validate().is_ok());
  }

  #[test]
  fn optional_fields_may_be_absent() {
    let r = NewRule {
      amount_for_free_delivery: None,
      zone: None,
      ..rule()
    };
    assert!(r.validate().is_ok());
  }

  #[test]
  fn blank_location_is_rejected() {
    for location in ["", "   ", "\t\n"] {
      let r = NewRule { location: location.into(), ..rule() };
      assert!(matches!(r.validate(), Err(Error::BlankLocation)));
    }
  }

  #[test]
  fn negative_amounts_are_rejected() {
    let r = NewRule { min_order_amount: -1.0, ..rule() };
    assert!(matches!(
      r.validate(),
      Err(Error::InvalidAmount { field: "min_order_amount", .. })
    ));

    let r = NewRule { delivery_charge: -0.01, ..rule() };
    assert!(matches!(
      r.validate(),
      Err(Error::InvalidAmount { field: "delivery_charge", .. })
    ));

    let r = NewRule { amount_for_free_delivery: Some(-200.0), ..rule() };
    assert!(matches!(
      r.validate(),
      Err(Error::InvalidAmount { field: "amount_for_free_delivery", .. })
    ));
  }

  #[test]
  fn zero_amounts_are_allowed() {
    let r = NewRule {
      min_order_amount: 0.0,
      delivery_charge: 0.0,
      amount_for_free_delivery: Some(0.0),
      ..rule()
    };
    assert!(r.validate().is_ok());
  }

  #[test]
  fn non_finite_amounts_are_rejected() {
    let r = NewRule { min_order_amount: f64::NAN, ..rule() };
    assert!(matches!(r.validate(), Err(Error::InvalidAmount { .. })));

    let r = NewRule { delivery_charge: f64::INFINITY, ..rule() };
    assert!(matches!(r.validate(), Err(Error::InvalidAmount { .. })));
  }
}
