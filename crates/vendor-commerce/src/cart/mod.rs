//! Shopping cart module.
//!
//! Cart lines, merge-on-add semantics, and the delivery-fee policy.

mod cart;
mod pricing;

pub use cart::{Cart, CartLine, MAX_QUANTITY_PER_LINE};
pub use pricing::{CartPricing, DeliveryPolicy};
