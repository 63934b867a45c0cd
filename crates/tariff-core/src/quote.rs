//! Fee computation — the outcome for one location and one order amount.
//!
//! The computation is a pure function of a single rule; the store only
//! supplies the rule lookup. Both thresholds are inclusive, and the
//! free-delivery check runs first, so an amount meeting both lands on the
//! outcome most favourable to the customer.

use serde::{Deserialize, Serialize};

use crate::rule::FeeRule;

/// Outcome of a fee lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FeeQuote {
  /// The order amount reached the rule's free-delivery threshold.
  FreeDelivery,
  /// The order qualifies for paid delivery at the rule's flat charge.
  ChargeApplies { delivery_charge: f64 },
  /// The order is below the rule's minimum. The charge reported is the one
  /// that would apply once the minimum is met.
  MinimumNotMet {
    min_order_amount: f64,
    delivery_charge:  f64,
  },
  /// No rule exists for the requested location.
  LocationNotFound,
}

impl FeeRule {
  /// Compute the fee outcome for `order_amount` under this rule.
  ///
  /// A rule without a free-delivery threshold never yields
  /// [`FeeQuote::FreeDelivery`]: the absent threshold is unreachable, not
  /// zero or infinite.
  pub fn quote(&self, order_amount: f64) -> FeeQuote {
    if let Some(threshold) = self.amount_for_free_delivery {
      if order_amount >= threshold {
        return FeeQuote::FreeDelivery;
      }
    }
    if order_amount >= self.min_order_amount {
      FeeQuote::ChargeApplies { delivery_charge: self.delivery_charge }
    } else {
      FeeQuote::MinimumNotMet {
        min_order_amount: self.min_order_amount,
        delivery_charge:  self.delivery_charge,
      }
    }
  }
}
