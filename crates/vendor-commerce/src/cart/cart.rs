//! Cart and line types.

use crate::cart::{CartPricing, DeliveryPolicy};
use crate::catalog::Product;
use crate::error::StoreError;
use crate::ids::{CartId, ProductId};
use crate::money::{Currency, Money};
use serde::{Deserialize, Serialize};

/// Maximum quantity allowed per cart line.
pub const MAX_QUANTITY_PER_LINE: u32 = 9999;

/// A line in the cart: a product snapshot plus its quantity.
///
/// A line always holds a quantity of at least one; dropping to zero
/// removes it from the cart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    /// The product as it was when added.
    pub product: Product,
    /// Units of the product in the cart.
    pub quantity: u32,
}

impl CartLine {
    /// Quantity × unit price.
    pub fn line_total(&self) -> Money {
        self.product.price.multiply(self.quantity as i64)
    }
}

/// A shopping cart.
///
/// Adding a product that is already present merges into the existing
/// line instead of creating a duplicate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    /// Unique cart identifier.
    pub id: CartId,
    /// Lines in the cart, in insertion order.
    pub lines: Vec<CartLine>,
    /// Cart currency.
    pub currency: Currency,
}

impl Cart {
    /// Create a new empty cart.
    pub fn new() -> Self {
        Self {
            id: CartId::generate(),
            lines: Vec::new(),
            currency: Currency::INR,
        }
    }

    /// Add one unit of a product, merging with an existing line.
    ///
    /// Returns the line's new quantity.
    pub fn add(&mut self, product: &Product) -> Result<u32, StoreError> {
        self.add_qty(product, 1)
    }

    /// Add `quantity` units of a product, merging with an existing line.
    ///
    /// Out-of-stock products are rejected; a zero quantity is invalid
    /// (the storefront disables the button instead of sending it).
    /// Quantities cap at [`MAX_QUANTITY_PER_LINE`]. Every line must share
    /// the cart currency, so the subtotal fold never mixes currencies.
    pub fn add_qty(&mut self, product: &Product, quantity: u32) -> Result<u32, StoreError> {
        if !product.in_stock {
            return Err(StoreError::OutOfStock(product.id.to_string()));
        }
        if product.price.currency != self.currency {
            return Err(StoreError::CurrencyMismatch {
                expected: self.currency.code().to_string(),
                got: product.price.currency.code().to_string(),
            });
        }
        if quantity == 0 {
            return Err(StoreError::InvalidQuantity(0));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product.id == product.id) {
            line.quantity = line
                .quantity
                .saturating_add(quantity)
                .min(MAX_QUANTITY_PER_LINE);
            return Ok(line.quantity);
        }

        let quantity = quantity.min(MAX_QUANTITY_PER_LINE);
        self.lines.push(CartLine {
            product: product.clone(),
            quantity,
        });
        tracing::debug!(product = %product.id, quantity, "cart line added");
        Ok(quantity)
    }

    /// Set a line's quantity. Zero removes the line.
    ///
    /// Returns whether a line was updated or removed.
    pub fn update_quantity(&mut self, product_id: &ProductId, quantity: u32) -> bool {
        if quantity == 0 {
            return self.remove(product_id);
        }
        if let Some(line) = self.lines.iter_mut().find(|l| &l.product.id == product_id) {
            line.quantity = quantity.min(MAX_QUANTITY_PER_LINE);
            true
        } else {
            false
        }
    }

    /// Remove a line from the cart.
    pub fn remove(&mut self, product_id: &ProductId) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| &l.product.id != product_id);
        self.lines.len() < before
    }

    /// Clear all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Total units across all lines (the floating-button badge).
    pub fn total_items(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Number of distinct lines (the cart panel badge).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Get a line by product ID.
    pub fn get_line(&self, product_id: &ProductId) -> Option<&CartLine> {
        self.lines.iter().find(|l| &l.product.id == product_id)
    }

    /// Sum of line totals, before delivery.
    pub fn subtotal(&self) -> Money {
        self.lines
            .iter()
            .fold(Money::zero(self.currency), |acc, l| acc.add(&l.line_total()))
    }

    /// Full pricing breakdown under the given delivery policy.
    pub fn pricing(&self, policy: &DeliveryPolicy) -> CartPricing {
        let subtotal = self.subtotal();
        let delivery_fee = policy.fee_for(&subtotal);
        CartPricing {
            subtotal,
            delivery_fee,
            total: subtotal.add(&delivery_fee),
        }
    }
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocalizedName, ProductCategory};

    fn onions() -> Product {
        Product::new(
            "1",
            LocalizedName::new("Fresh Onions", "ताज़ा प्याज", "வெங்காயம்"),
            Money::from_rupees(25),
            Money::from_rupees(30),
            "per kg",
            4.5,
            ProductCategory::Vegetables,
            "🧅",
        )
    }

    fn tomatoes() -> Product {
        Product::new(
            "2",
            LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
            Money::from_rupees(40),
            Money::from_rupees(35),
            "per kg",
            4.2,
            ProductCategory::Vegetables,
            "🍅",
        )
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = Cart::new();
        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
    }

    #[test]
    fn test_adding_twice_increments_to_two() {
        let mut cart = Cart::new();
        let p = onions();
        assert_eq!(cart.add(&p).unwrap(), 1);
        assert_eq!(cart.add(&p).unwrap(), 2);
        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.total_items(), 2);
    }

    #[test]
    fn test_zero_quantity_removes_line() {
        let mut cart = Cart::new();
        let p = onions();
        cart.add(&p).unwrap();
        assert!(cart.update_quantity(&p.id, 0));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_quantity_sets_exact_value() {
        let mut cart = Cart::new();
        let p = onions();
        cart.add(&p).unwrap();
        assert!(cart.update_quantity(&p.id, 5));
        assert_eq!(cart.get_line(&p.id).unwrap().quantity, 5);
    }

    #[test]
    fn test_update_missing_line_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.update_quantity(&ProductId::new("missing"), 3));
    }

    #[test]
    fn test_out_of_stock_rejected() {
        let mut cart = Cart::new();
        let p = onions().out_of_stock();
        assert!(matches!(cart.add(&p), Err(StoreError::OutOfStock(_))));
    }

    #[test]
    fn test_zero_add_rejected() {
        let mut cart = Cart::new();
        assert!(matches!(
            cart.add_qty(&onions(), 0),
            Err(StoreError::InvalidQuantity(0))
        ));
    }

    #[test]
    fn test_foreign_currency_rejected() {
        let mut cart = Cart::new();
        let mut p = onions();
        p.price = Money::new(2500, Currency::USD);
        assert!(matches!(
            cart.add(&p),
            Err(StoreError::CurrencyMismatch { .. })
        ));
    }

    #[test]
    fn test_quantity_caps_at_limit() {
        let mut cart = Cart::new();
        let p = onions();
        cart.add_qty(&p, MAX_QUANTITY_PER_LINE).unwrap();
        assert_eq!(cart.add(&p).unwrap(), MAX_QUANTITY_PER_LINE);
    }

    #[test]
    fn test_line_count_differs_from_total_items() {
        let mut cart = Cart::new();
        cart.add_qty(&onions(), 3).unwrap();
        cart.add(&tomatoes()).unwrap();
        assert_eq!(cart.line_count(), 2);
        assert_eq!(cart.total_items(), 4);
    }

    #[test]
    fn test_subtotal() {
        let mut cart = Cart::new();
        cart.add_qty(&onions(), 2).unwrap(); // 50
        cart.add(&tomatoes()).unwrap(); // 40
        assert_eq!(cart.subtotal(), Money::from_rupees(90));
    }

    #[test]
    fn test_clear() {
        let mut cart = Cart::new();
        cart.add(&onions()).unwrap();
        cart.clear();
        assert!(cart.is_empty());
    }
}
