//! Delivery-fee policy and cart pricing breakdown.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Flat delivery fee with a free-delivery threshold.
///
/// The fee is waived only when the subtotal strictly exceeds the
/// threshold; an order of exactly the threshold amount still pays it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeliveryPolicy {
    /// Flat fee charged below the threshold.
    pub fee: Money,
    /// Subtotal above which delivery is free.
    pub free_threshold: Money,
}

impl Default for DeliveryPolicy {
    fn default() -> Self {
        Self {
            fee: Money::from_rupees(40),
            free_threshold: Money::from_rupees(500),
        }
    }
}

impl DeliveryPolicy {
    pub fn new(fee: Money, free_threshold: Money) -> Self {
        Self {
            fee,
            free_threshold,
        }
    }

    /// Whether the subtotal qualifies for free delivery.
    pub fn qualifies_for_free(&self, subtotal: &Money) -> bool {
        subtotal.amount_paise > self.free_threshold.amount_paise
    }

    /// The delivery fee charged for the given subtotal.
    pub fn fee_for(&self, subtotal: &Money) -> Money {
        if self.qualifies_for_free(subtotal) {
            Money::zero(self.fee.currency)
        } else {
            self.fee
        }
    }

    /// How much more to spend for free delivery.
    ///
    /// `None` once the subtotal has reached the threshold; the hint only
    /// shows while strictly below it.
    pub fn amount_to_free_delivery(&self, subtotal: &Money) -> Option<Money> {
        if subtotal.amount_paise < self.free_threshold.amount_paise {
            Some(self.free_threshold.subtract(subtotal))
        } else {
            None
        }
    }
}

/// Pricing breakdown for a cart at checkout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartPricing {
    /// Sum of line totals.
    pub subtotal: Money,
    /// Delivery fee after the free-threshold check.
    pub delivery_fee: Money,
    /// Subtotal plus delivery fee.
    pub total: Money,
}

impl CartPricing {
    /// Whether the delivery-fee row shows the Free badge.
    pub fn free_delivery(&self) -> bool {
        self.delivery_fee.is_zero() && self.subtotal.is_positive()
    }
}
