//! Order confirmation types.

use crate::ids::OrderId;
use crate::money::Money;
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Support phone number shown on the confirmation.
pub const SUPPORT_PHONE: &str = "+91 98765 43210";
/// Support email shown on the confirmation.
pub const SUPPORT_EMAIL: &str = "support@vendorconnect.com";

/// Generate an order number: "VC" plus nine uppercase alphanumerics.
pub fn generate_order_number<R: Rng>(rng: &mut R) -> OrderId {
    const ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    let suffix: String = (0..9)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    OrderId::new(format!("VC{suffix}"))
}

/// A purchased line captured on the confirmation.
///
/// The cart is cleared when payment succeeds, so the confirmation keeps
/// its own snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderedItem {
    /// English product name.
    pub name: String,
    /// Hindi product name.
    pub name_hi: String,
    /// Units purchased.
    pub quantity: u32,
    /// Unit price paid.
    pub unit_price: Money,
    /// Unit label (e.g., "per kg").
    pub unit: String,
}

impl OrderedItem {
    /// Quantity × unit price.
    pub fn line_total(&self) -> Money {
        self.unit_price.multiply(self.quantity as i64)
    }
}

/// A step on the fulfillment timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentMilestone {
    pub label: &'static str,
    pub eta: &'static str,
}

/// The order summary shown after a successful payment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Order number ("VC" + 9 uppercase alphanumerics).
    pub order_number: OrderId,
    /// Amount charged, delivery fee included.
    pub amount: Money,
    /// When the order was placed.
    pub placed_at: DateTime<Utc>,
    /// Expected delivery, 24 hours out.
    pub estimated_delivery: DateTime<Utc>,
    /// Items purchased.
    pub items: Vec<OrderedItem>,
}

impl OrderConfirmation {
    pub fn new(
        order_number: OrderId,
        amount: Money,
        placed_at: DateTime<Utc>,
        items: Vec<OrderedItem>,
    ) -> Self {
        Self {
            order_number,
            amount,
            placed_at,
            estimated_delivery: placed_at + Duration::hours(24),
            items,
        }
    }

    /// The delivery date in day/month/year order.
    pub fn estimated_delivery_label(&self) -> String {
        self.estimated_delivery.format("%-d/%-m/%Y").to_string()
    }

    /// The payment status badge. Payments only complete, so this is fixed.
    pub fn status_label(&self) -> &'static str {
        "Completed"
    }

    /// The fixed fulfillment timeline.
    pub fn timeline(&self) -> [FulfillmentMilestone; 3] {
        [
            FulfillmentMilestone {
                label: "Packing",
                eta: "Within 2-4 hours",
            },
            FulfillmentMilestone {
                label: "Ready",
                eta: "Within 4-6 hours",
            },
            FulfillmentMilestone {
                label: "Delivered",
                eta: "Within 24 hours",
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_order_number_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            let id = generate_order_number(&mut rng);
            let s = id.as_str();
            assert_eq!(s.len(), 11);
            assert!(s.starts_with("VC"));
            assert!(s[2..]
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_estimated_delivery_is_next_day() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 7, 10, 30, 0).unwrap();
        let confirmation = OrderConfirmation::new(
            OrderId::new("VC4X8K2M9QT"),
            Money::from_rupees(130),
            placed,
            Vec::new(),
        );
        assert_eq!(
            confirmation.estimated_delivery,
            Utc.with_ymd_and_hms(2024, 3, 8, 10, 30, 0).unwrap()
        );
        assert_eq!(confirmation.estimated_delivery_label(), "8/3/2024");
    }

    #[test]
    fn test_ordered_item_line_total() {
        let item = OrderedItem {
            name: "Fresh Onions".to_string(),
            name_hi: "ताज़ा प्याज".to_string(),
            quantity: 2,
            unit_price: Money::from_rupees(25),
            unit: "per kg".to_string(),
        };
        assert_eq!(item.line_total(), Money::from_rupees(50));
    }

    #[test]
    fn test_timeline_milestones() {
        let confirmation = OrderConfirmation::new(
            OrderId::new("VCAAAAAAAAA"),
            Money::from_rupees(90),
            Utc::now(),
            Vec::new(),
        );
        let timeline = confirmation.timeline();
        assert_eq!(timeline[0].label, "Packing");
        assert_eq!(timeline[2].eta, "Within 24 hours");
        assert_eq!(confirmation.status_label(), "Completed");
    }
}
