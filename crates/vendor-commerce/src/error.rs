//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
///
/// User-typed numbers never reach this enum: quantity input is clamped or
/// coerced to zero at the edge. These variants cover the operations the UI
/// guards with disabled controls (joining a full pool, paying with an
/// incomplete form) so callers can still take the typed path.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Product not found.
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    /// Product is out of stock.
    #[error("Product out of stock: {0}")]
    OutOfStock(String),

    /// Item not in cart.
    #[error("Item not in cart: {0}")]
    ItemNotInCart(String),

    /// Invalid quantity.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(i64),

    /// Pool not found.
    #[error("Pool not found: {0}")]
    PoolNotFound(String),

    /// Pool already reached its target quantity.
    #[error("Pool already complete: {0}")]
    PoolComplete(String),

    /// Pool reached its participant cap.
    #[error("Pool full: {0} ({1}/{2} members)")]
    PoolFull(String, u32, u32),

    /// Caller is not a member of the pool.
    #[error("Not a member of pool: {0}")]
    NotAMember(String),

    /// Caller already joined the pool.
    #[error("Already joined pool: {0}")]
    AlreadyJoined(String),

    /// Pool contribution must be at least one unit.
    #[error("Invalid pool contribution: {0}")]
    InvalidContribution(u32),

    /// Alert not found.
    #[error("Alert not found: {0}")]
    AlertNotFound(String),

    /// Alert is missing a product name or a usable target price.
    #[error("Invalid alert: {0}")]
    InvalidAlert(String),

    /// Payment form failed validation.
    #[error("Invalid payment details: {0}")]
    InvalidPayment(String),

    /// Currency mismatch.
    #[error("Currency mismatch: expected {expected}, got {got}")]
    CurrencyMismatch { expected: String, got: String },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for StoreError {
    fn from(e: serde_json::Error) -> Self {
        StoreError::SerializationError(e.to_string())
    }
}
