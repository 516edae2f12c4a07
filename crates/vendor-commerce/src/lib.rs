//! Wholesale storefront domain types and logic for VendorConnect.
//!
//! This crate provides the domain layer for a street-vendor sourcing app:
//!
//! - **Catalog**: Multilingual products, categories, bulk wholesale listings
//! - **Cart**: Shopping cart with quantity steppers and delivery pricing
//! - **Pooling**: Group-buying pools that unlock wholesale prices
//! - **Alerts**: Price alerts delivered over WhatsApp/SMS (simulated)
//! - **Checkout**: Payment methods, a simulated gateway, order confirmations
//! - **Session**: Storefront state, voice ordering stub, connectivity monitor
//!
//! # Example
//!
//! ```rust,ignore
//! use vendor_commerce::prelude::*;
//!
//! // Browse the catalog and fill a cart
//! let onions = Product::new(
//!     "1",
//!     LocalizedName::new("Fresh Onions", "ताज़ा प्याज", "வெங்காயம்"),
//!     Money::from_rupees(25),
//!     Money::from_rupees(30),
//!     "per kg",
//!     4.5,
//!     ProductCategory::Vegetables,
//!     "🧅",
//! );
//!
//! let mut cart = Cart::new();
//! cart.add(&onions)?;
//!
//! // Price it with the delivery policy
//! let pricing = cart.pricing(&DeliveryPolicy::default());
//! println!("Total: {}", pricing.total.display());
//!
//! // Pay through the simulated gateway
//! let gateway = SimulatedGateway::new();
//! let request = PaymentRequest::new(pricing.total, PaymentMethod::CashOnDelivery);
//! let receipt = gateway.process(&request).await?;
//! ```

pub mod error;
pub mod ids;
pub mod money;

pub mod alerts;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod pooling;
pub mod session;

pub use error::StoreError;
pub use ids::*;
pub use money::{Currency, Money};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::*;
    pub use crate::money::{Currency, Money};

    // Catalog
    pub use crate::catalog::{
        BulkCategory, BulkProduct, BulkQuote, Language, LocalizedName, PriceChange,
        PriceDirection, Product, ProductCategory,
    };

    // Cart
    pub use crate::cart::{Cart, CartLine, CartPricing, DeliveryPolicy};

    // Pooling
    pub use crate::pooling::{BulkPool, PoolBoard, PoolCountdown};

    // Alerts
    pub use crate::alerts::{
        AlertCenter, AlertChannel, AlertDirection, NotificationSettings, PriceAlert,
    };

    // Checkout
    pub use crate::checkout::{
        FulfillmentMilestone, OrderConfirmation, OrderedItem, PaymentGateway, PaymentMethod,
        PaymentReceipt, PaymentRequest, SimulatedGateway,
    };

    // Session
    pub use crate::session::{
        ConnectivityMonitor, Overlay, Session, SessionEvent, StoreTab, Utterance, VoiceOrder,
        VoiceSession,
    };
}
