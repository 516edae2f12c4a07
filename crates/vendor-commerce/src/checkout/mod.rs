//! Checkout module.
//!
//! Payment methods, the simulated gateway, and order confirmations.

mod order;
mod payment;

pub use order::{
    generate_order_number, FulfillmentMilestone, OrderConfirmation, OrderedItem, SUPPORT_EMAIL,
    SUPPORT_PHONE,
};
pub use payment::{
    cod_surcharge, format_card_number, format_cvv, format_expiry, PaymentGateway, PaymentMethod,
    PaymentReceipt, PaymentRequest, SimulatedGateway,
};
