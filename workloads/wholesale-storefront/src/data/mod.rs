//! Seed data for the VendorConnect storefront.

mod alerts;
mod catalog;
mod pools;

pub use alerts::*;
pub use catalog::*;
pub use pools::*;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use vendor_commerce::alerts::AlertCenter;
use vendor_commerce::catalog::{BulkProduct, Product};
use vendor_commerce::pooling::BulkPool;

/// Everything the storefront pages render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontData {
    pub products: Vec<Product>,
    pub bulk_products: Vec<BulkProduct>,
    pub pools: Vec<BulkPool>,
    pub alerts: AlertCenter,
}

impl StorefrontData {
    /// The demo dataset every page starts from.
    pub fn seed(now: DateTime<Utc>) -> Self {
        Self {
            products: seed_products(),
            bulk_products: seed_bulk_products(),
            pools: seed_pools(now),
            alerts: AlertCenter::new(seed_alerts()),
        }
    }
}
