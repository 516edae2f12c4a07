//! Money type for representing monetary values.
//!
//! Amounts are stored as paise-based integers to avoid the floating-point
//! drift that plagues monetary calculations. INR is the default currency
//! for the storefront; a small set of others is supported for completeness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// Supported currencies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    #[default]
    INR,
    USD,
    EUR,
}

impl Currency {
    /// Get the currency code (e.g., "INR").
    pub fn code(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
        }
    }

    /// Get the currency symbol (e.g., "₹").
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::INR => "\u{20b9}",
            Currency::USD => "$",
            Currency::EUR => "\u{20ac}",
        }
    }

    /// Get the number of minor-unit decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        2
    }

    /// Parse a currency code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_uppercase().as_str() {
            "INR" => Some(Currency::INR),
            "USD" => Some(Currency::USD),
            "EUR" => Some(Currency::EUR),
            _ => None,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A monetary value with currency.
///
/// Amounts are stored in the smallest unit of the currency (paise for INR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in the smallest currency unit (e.g., paise).
    pub amount_paise: i64,
    /// The currency.
    pub currency: Currency,
}

impl Money {
    /// Create a new Money value from the smallest unit.
    pub fn new(amount_paise: i64, currency: Currency) -> Self {
        Self {
            amount_paise,
            currency,
        }
    }

    /// Create an INR value from whole rupees.
    ///
    /// ```
    /// use vendor_commerce::money::Money;
    /// let price = Money::from_rupees(25);
    /// assert_eq!(price.amount_paise, 2500);
    /// ```
    pub fn from_rupees(rupees: i64) -> Self {
        Self::new(rupees * 100, Currency::INR)
    }

    /// Create an INR value from paise.
    pub fn from_paise(paise: i64) -> Self {
        Self::new(paise, Currency::INR)
    }

    /// Create a Money value from a decimal amount.
    pub fn from_decimal(amount: f64, currency: Currency) -> Self {
        let multiplier = 10_i64.pow(currency.decimal_places());
        let amount_paise = (amount * multiplier as f64).round() as i64;
        Self::new(amount_paise, currency)
    }

    /// Create a zero amount in the given currency.
    pub fn zero(currency: Currency) -> Self {
        Self::new(0, currency)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_paise == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_paise > 0
    }

    /// Convert to a decimal value.
    pub fn to_decimal(&self) -> f64 {
        let divisor = 10_i64.pow(self.currency.decimal_places());
        self.amount_paise as f64 / divisor as f64
    }

    /// Format for price tags (e.g., "₹25", "₹47.50").
    ///
    /// Whole amounts drop the decimal part; fractional amounts keep two
    /// places. Totals rows want [`Money::display_fixed`] instead.
    pub fn display(&self) -> String {
        if self.amount_paise % 100 == 0 {
            format!("{}{}", self.currency.symbol(), self.amount_paise / 100)
        } else {
            format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
        }
    }

    /// Format with two decimal places always (e.g., "₹90.00").
    pub fn display_fixed(&self) -> String {
        format!("{}{:.2}", self.currency.symbol(), self.to_decimal())
    }

    /// Format the bare amount without symbol (e.g., "90.00").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Add another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match. Use `try_add` for fallible addition.
    pub fn add(&self, other: &Money) -> Money {
        self.try_add(other).expect("Currency mismatch in addition")
    }

    /// Try to add another Money value, returning None if currencies don't match.
    pub fn try_add(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_paise + other.amount_paise,
            self.currency,
        ))
    }

    /// Subtract another Money value.
    ///
    /// # Panics
    /// Panics if currencies don't match.
    pub fn subtract(&self, other: &Money) -> Money {
        self.try_subtract(other)
            .expect("Currency mismatch in subtraction")
    }

    /// Try to subtract another Money value.
    pub fn try_subtract(&self, other: &Money) -> Option<Money> {
        if self.currency != other.currency {
            return None;
        }
        Some(Money::new(
            self.amount_paise - other.amount_paise,
            self.currency,
        ))
    }

    /// Subtract, saturating at zero instead of going negative.
    pub fn saturating_subtract(&self, other: &Money) -> Money {
        let diff = self.amount_paise - other.amount_paise;
        Money::new(diff.max(0), self.currency)
    }

    /// Multiply by an integer quantity.
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_paise * factor, self.currency)
    }

    /// Multiply by a decimal factor (e.g., for percentages).
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        let new_amount = (self.amount_paise as f64 * factor).round() as i64;
        Money::new(new_amount, self.currency)
    }

    /// Calculate a percentage of this amount.
    pub fn percentage(&self, percent: f64) -> Money {
        self.multiply_decimal(percent / 100.0)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>, currency: Currency) -> Money {
        iter.fold(Money::zero(currency), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::add(&self, &other)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::subtract(&self, &other)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_rupees() {
        let m = Money::from_rupees(25);
        assert_eq!(m.amount_paise, 2500);
        assert_eq!(m.currency, Currency::INR);
    }

    #[test]
    fn test_money_from_decimal() {
        let m = Money::from_decimal(47.50, Currency::INR);
        assert_eq!(m.amount_paise, 4750);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::from_paise(4750);
        assert!((m.to_decimal() - 47.50).abs() < 0.001);
    }

    #[test]
    fn test_display_trims_whole_rupees() {
        assert_eq!(Money::from_rupees(25).display(), "\u{20b9}25");
        assert_eq!(Money::from_paise(4750).display(), "\u{20b9}47.50");
    }

    #[test]
    fn test_display_fixed_keeps_decimals() {
        assert_eq!(Money::from_rupees(90).display_fixed(), "\u{20b9}90.00");
        assert_eq!(Money::from_rupees(90).display_amount(), "90.00");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(5);
        assert_eq!((a + b).amount_paise, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::from_rupees(10);
        let b = Money::from_rupees(3);
        assert_eq!(a.subtract(&b).amount_paise, 700);
    }

    #[test]
    fn test_saturating_subtract_floors_at_zero() {
        let a = Money::from_rupees(3);
        let b = Money::from_rupees(10);
        assert!(a.saturating_subtract(&b).is_zero());
    }

    #[test]
    fn test_money_multiply() {
        let unit = Money::from_rupees(40);
        assert_eq!(unit.multiply(3).amount_paise, 12000);
    }

    #[test]
    fn test_money_percentage() {
        let m = Money::from_rupees(100);
        assert_eq!(m.percentage(10.0).amount_paise, 1000);
    }

    #[test]
    fn test_money_sum() {
        let values = vec![Money::from_rupees(25), Money::from_rupees(40)];
        let total = Money::sum(values.iter(), Currency::INR);
        assert_eq!(total.amount_paise, 6500);
    }

    #[test]
    #[should_panic(expected = "Currency mismatch")]
    fn test_money_currency_mismatch() {
        let inr = Money::from_rupees(10);
        let usd = Money::new(1000, Currency::USD);
        let _ = inr + usd;
    }

    #[test]
    fn test_currency_from_code() {
        assert_eq!(Currency::from_code("inr"), Some(Currency::INR));
        assert_eq!(Currency::from_code("USD"), Some(Currency::USD));
        assert_eq!(Currency::from_code("XXX"), None);
    }
}
