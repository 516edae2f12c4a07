//! Group-buying pool seeds.

use chrono::{DateTime, Duration, Utc};
use vendor_commerce::pooling::BulkPool;
use vendor_commerce::{Money, PoolId};

/// Active pools near the vendor. The first one is already joined.
pub fn seed_pools(now: DateTime<Utc>) -> Vec<BulkPool> {
    vec![
        BulkPool {
            id: PoolId::from("1"),
            name: "Premium Onions".to_string(),
            name_hi: "प्रीमियम प्याज".to_string(),
            target_quantity: 100,
            current_quantity: 75,
            target_price: Money::from_rupees(22),
            current_price: Money::from_rupees(25),
            savings: Money::from_rupees(300),
            ends_at: now + Duration::hours(4),
            location: "Sector 21, Gurgaon".to_string(),
            participants: 8,
            max_participants: 12,
            my_contribution: 10,
            is_joined: true,
        },
        BulkPool {
            id: PoolId::from("2"),
            name: "Fresh Tomatoes".to_string(),
            name_hi: "ताज़े टमाटर".to_string(),
            target_quantity: 80,
            current_quantity: 45,
            target_price: Money::from_rupees(35),
            current_price: Money::from_rupees(40),
            savings: Money::from_rupees(400),
            ends_at: now + Duration::hours(6),
            location: "Market Area, Delhi".to_string(),
            participants: 6,
            max_participants: 10,
            my_contribution: 0,
            is_joined: false,
        },
        BulkPool {
            id: PoolId::from("3"),
            name: "Basmati Rice".to_string(),
            name_hi: "बासमती चावल".to_string(),
            target_quantity: 200,
            current_quantity: 180,
            target_price: Money::from_rupees(55),
            current_price: Money::from_rupees(60),
            savings: Money::from_rupees(1000),
            ends_at: now + Duration::hours(2),
            location: "Karol Bagh, Delhi".to_string(),
            participants: 15,
            max_participants: 20,
            my_contribution: 0,
            is_joined: false,
        },
    ]
}
