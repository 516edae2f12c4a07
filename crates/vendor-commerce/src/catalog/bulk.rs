//! Bulk-discount products and quantity-break pricing.
//!
//! Wholesale items carry a minimum bulk quantity. At or above it the bulk
//! unit price applies; below it the regular price applies and the quote
//! reports how many units short the order is.

use crate::ids::ProductId;
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Wholesale category filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BulkCategory {
    #[default]
    All,
    Grains,
    Pulses,
    Oils,
    Vegetables,
    Sweeteners,
}

impl BulkCategory {
    /// All filter chips in display order.
    pub const ALL: [BulkCategory; 6] = [
        BulkCategory::All,
        BulkCategory::Grains,
        BulkCategory::Pulses,
        BulkCategory::Oils,
        BulkCategory::Vegetables,
        BulkCategory::Sweeteners,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BulkCategory::All => "all",
            BulkCategory::Grains => "grains",
            BulkCategory::Pulses => "pulses",
            BulkCategory::Oils => "oils",
            BulkCategory::Vegetables => "vegetables",
            BulkCategory::Sweeteners => "sweeteners",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "all" => Some(BulkCategory::All),
            "grains" => Some(BulkCategory::Grains),
            "pulses" => Some(BulkCategory::Pulses),
            "oils" => Some(BulkCategory::Oils),
            "vegetables" => Some(BulkCategory::Vegetables),
            "sweeteners" => Some(BulkCategory::Sweeteners),
            _ => None,
        }
    }

    /// Filter chip label.
    pub fn label(&self) -> &'static str {
        match self {
            BulkCategory::All => "All Categories",
            BulkCategory::Grains => "Grains & Cereals",
            BulkCategory::Pulses => "Pulses & Lentils",
            BulkCategory::Oils => "Oils & Ghee",
            BulkCategory::Vegetables => "Vegetables",
            BulkCategory::Sweeteners => "Sugar & Sweeteners",
        }
    }

    /// Filter chip emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            BulkCategory::All => "📦",
            BulkCategory::Grains => "🌾",
            BulkCategory::Pulses => "🟡",
            BulkCategory::Oils => "🫒",
            BulkCategory::Vegetables => "🥕",
            BulkCategory::Sweeteners => "🍯",
        }
    }

    /// Whether a product in `category` passes this filter.
    pub fn matches(&self, category: BulkCategory) -> bool {
        *self == BulkCategory::All || *self == category
    }
}

/// A wholesale product with a quantity-break price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkProduct {
    /// Unique product identifier.
    pub id: ProductId,
    /// English display name.
    pub name: String,
    /// Hindi display name.
    pub name_hi: String,
    /// Regular unit price.
    pub price: Money,
    /// Previously listed unit price.
    pub previous_price: Money,
    /// Unit label (e.g., "kg", "liter").
    pub unit: String,
    /// Customer rating out of 5.
    pub rating: f32,
    /// Wholesale category.
    pub category: BulkCategory,
    /// Minimum quantity that unlocks the bulk price.
    pub min_quantity: u32,
    /// Discounted unit price at or above the minimum.
    pub bulk_price: Money,
    /// Advertised savings percentage for the listing badge.
    pub savings_percent: f64,
}

/// A priced bulk order line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkQuote {
    /// Unit price actually applied.
    pub unit_price: Money,
    /// Quantity × applied unit price.
    pub line_total: Money,
    /// Amount saved versus the regular price (zero below the minimum).
    pub savings: Money,
    /// Units short of the bulk minimum (zero at or above it, and zero
    /// for an empty line).
    pub shortfall: u32,
}

impl BulkProduct {
    /// Whether `quantity` unlocks the bulk price.
    pub fn qualifies(&self, quantity: u32) -> bool {
        quantity >= self.min_quantity
    }

    /// The unit price applied at the given quantity.
    pub fn effective_unit_price(&self, quantity: u32) -> Money {
        if self.qualifies(quantity) {
            self.bulk_price
        } else {
            self.price
        }
    }

    /// Price a line at the given quantity.
    pub fn quote(&self, quantity: u32) -> BulkQuote {
        let unit_price = self.effective_unit_price(quantity);
        let line_total = unit_price.multiply(quantity as i64);
        let savings = if self.qualifies(quantity) {
            self.price
                .subtract(&self.bulk_price)
                .multiply(quantity as i64)
        } else {
            Money::zero(self.price.currency)
        };
        let shortfall = if quantity > 0 && quantity < self.min_quantity {
            self.min_quantity - quantity
        } else {
            0
        };
        BulkQuote {
            unit_price,
            line_total,
            savings,
            shortfall,
        }
    }

    /// Snap a requested quantity to a valid order size.
    ///
    /// Positive quantities below the minimum snap up to it; zero clears
    /// the line.
    pub fn normalize_quantity(&self, desired: u32) -> u32 {
        if desired > 0 && desired < self.min_quantity {
            self.min_quantity
        } else {
            desired
        }
    }

    /// Apply a stepper press to the current quantity.
    ///
    /// Saturates at zero, then snaps. A decrement from the minimum lands
    /// back on the minimum; only setting the quantity to zero directly
    /// clears the line.
    pub fn step_quantity(&self, current: u32, change: i64) -> u32 {
        let stepped = (current as i64 + change).max(0) as u32;
        self.normalize_quantity(stepped)
    }
}

/// Sum the savings over a set of quoted lines.
pub fn total_savings<'a>(lines: impl Iterator<Item = (&'a BulkProduct, u32)>) -> Money {
    lines.fold(Money::zero(Currency::INR), |acc, (product, qty)| {
        acc.add(&product.quote(qty).savings)
    })
}
