//! Price alert seeds.

use vendor_commerce::alerts::{AlertChannel, AlertDirection, PriceAlert};
use vendor_commerce::{AlertId, Money};

/// The vendor's starting alerts.
pub fn seed_alerts() -> Vec<PriceAlert> {
    vec![
        PriceAlert {
            id: AlertId::from("1"),
            product_name: "Onions".to_string(),
            product_name_hi: "प्याज".to_string(),
            current_price: Money::from_rupees(25),
            target_price: Money::from_rupees(20),
            direction: AlertDirection::Below,
            channel: AlertChannel::Whatsapp,
            is_active: true,
        },
        PriceAlert {
            id: AlertId::from("2"),
            product_name: "Tomatoes".to_string(),
            product_name_hi: "टमाटर".to_string(),
            current_price: Money::from_rupees(40),
            target_price: Money::from_rupees(50),
            direction: AlertDirection::Above,
            channel: AlertChannel::Both,
            is_active: true,
        },
    ]
}
