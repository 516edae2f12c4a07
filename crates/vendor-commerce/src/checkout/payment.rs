//! Payment methods and the simulated gateway.
//!
//! The gateway is a stand-in: it waits a fixed processing delay and then
//! reports success. There is no cancellation, retry, partial failure, or
//! timeout path. Form validation is the only way a payment is refused.

use crate::error::StoreError;
use crate::ids::PaymentId;
use crate::money::Money;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default processing delay for the simulated gateway.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(3000);

/// Group card digits in fours, capped at 16 digits (19 characters).
///
/// Mirrors the card field's input mask: non-digits are dropped, and
/// fewer than four digits pass through ungrouped.
pub fn format_card_number(input: &str) -> String {
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.len() < 4 {
        return digits;
    }
    let mut formatted = String::with_capacity(19);
    for (i, c) in digits.chars().take(16).enumerate() {
        if i > 0 && i % 4 == 0 {
            formatted.push(' ');
        }
        formatted.push(c);
    }
    formatted
}

/// Mask an expiry input into "MM/YY", capped at five characters.
pub fn format_expiry(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Keep only digits, capped at four.
pub fn format_cvv(input: &str) -> String {
    input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect()
}

/// Cash-on-delivery surcharge shown in the method note.
///
/// Display copy only: the charged total never includes it.
pub fn cod_surcharge() -> Money {
    Money::from_rupees(20)
}

/// How the customer pays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum PaymentMethod {
    /// Credit or debit card. Fields hold the masked form values.
    Card {
        number: String,
        expiry: String,
        cvv: String,
        holder: String,
    },
    /// UPI virtual payment address.
    Upi { id: String },
    /// Pay in cash at the door.
    CashOnDelivery,
}

impl PaymentMethod {
    /// Build a card method, running the raw inputs through the masks.
    pub fn card(number: &str, expiry: &str, cvv: &str, holder: impl Into<String>) -> Self {
        PaymentMethod::Card {
            number: format_card_number(number),
            expiry: format_expiry(expiry),
            cvv: format_cvv(cvv),
            holder: holder.into(),
        }
    }

    /// Build a UPI method.
    pub fn upi(id: impl Into<String>) -> Self {
        PaymentMethod::Upi { id: id.into() }
    }

    /// Method key used in tabs and receipts.
    pub fn kind(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "card",
            PaymentMethod::Upi { .. } => "upi",
            PaymentMethod::CashOnDelivery => "cod",
        }
    }

    /// Human-readable method name.
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card { .. } => "Card",
            PaymentMethod::Upi { .. } => "UPI",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }

    /// Validate the form values for this method.
    ///
    /// Cards need a full 16-digit number, a complete MM/YY expiry, a CVV
    /// of at least three digits, and a non-blank holder name. UPI needs
    /// an address containing `@` and longer than five characters. Cash
    /// on delivery always passes.
    pub fn validate(&self) -> Result<(), StoreError> {
        match self {
            PaymentMethod::Card {
                number,
                expiry,
                cvv,
                holder,
            } => {
                if number.len() < 19 {
                    return Err(StoreError::InvalidPayment("incomplete card number".into()));
                }
                if expiry.len() != 5 {
                    return Err(StoreError::InvalidPayment("incomplete expiry date".into()));
                }
                if cvv.len() < 3 {
                    return Err(StoreError::InvalidPayment("incomplete CVV".into()));
                }
                if holder.trim().is_empty() {
                    return Err(StoreError::InvalidPayment("cardholder name required".into()));
                }
                Ok(())
            }
            PaymentMethod::Upi { id } => {
                if id.contains('@') && id.len() > 5 {
                    Ok(())
                } else {
                    Err(StoreError::InvalidPayment("invalid UPI id".into()))
                }
            }
            PaymentMethod::CashOnDelivery => Ok(()),
        }
    }

    /// Whether the pay button is enabled.
    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

/// A charge to run through the gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Amount to charge, delivery fee included.
    pub amount: Money,
    /// Selected payment method.
    pub method: PaymentMethod,
}

impl PaymentRequest {
    pub fn new(amount: Money, method: PaymentMethod) -> Self {
        Self { amount, method }
    }
}

/// Proof of a completed charge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentReceipt {
    /// Unique payment identifier.
    pub payment_id: PaymentId,
    /// Method key ("card", "upi", "cod").
    pub method: String,
    /// Amount charged.
    pub amount: Money,
    /// When the charge completed.
    pub paid_at: DateTime<Utc>,
}

/// Payment processing backend.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Run a charge and return the receipt.
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, StoreError>;
}

/// Gateway stand-in: a fixed delay followed by unconditional success.
pub struct SimulatedGateway {
    processing_delay: Duration,
}

impl SimulatedGateway {
    /// Create a gateway with the standard 3-second delay.
    pub fn new() -> Self {
        Self {
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    /// Set the processing delay (demos and tests shorten it).
    pub fn with_processing_delay(mut self, delay: Duration) -> Self {
        self.processing_delay = delay;
        self
    }

    /// The configured processing delay.
    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn process(&self, request: &PaymentRequest) -> Result<PaymentReceipt, StoreError> {
        request.method.validate()?;

        tracing::info!(
            amount = %request.amount,
            method = request.method.kind(),
            "processing payment"
        );
        tokio::time::sleep(self.processing_delay).await;

        let receipt = PaymentReceipt {
            payment_id: PaymentId::generate(),
            method: request.method.kind().to_string(),
            amount: request.amount,
            paid_at: Utc::now(),
        };
        tracing::info!(payment = %receipt.payment_id, "payment completed");
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_number_mask() {
        assert_eq!(
            format_card_number("4111111111111111"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("4111-1111 2222"), "4111 1111 2222");
        assert_eq!(format_card_number("411"), "411");
        // Extra digits past 16 are dropped.
        assert_eq!(
            format_card_number("41111111111111112222"),
            "4111 1111 1111 1111"
        );
        assert_eq!(format_card_number("abc"), "");
    }

    #[test]
    fn test_expiry_mask() {
        assert_eq!(format_expiry("1227"), "12/27");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/27"), "12/27");
        assert_eq!(format_expiry("122734"), "12/27");
    }

    #[test]
    fn test_cvv_mask() {
        assert_eq!(format_cvv("12x34"), "1234");
        assert_eq!(format_cvv("123456"), "1234");
    }

    #[test]
    fn test_card_validation() {
        let valid = PaymentMethod::card("4111111111111111", "1227", "123", "Asha Devi");
        assert!(valid.is_valid());

        let short_number = PaymentMethod::card("4111", "1227", "123", "Asha Devi");
        assert!(!short_number.is_valid());

        let no_holder = PaymentMethod::card("4111111111111111", "1227", "123", "   ");
        assert!(!no_holder.is_valid());

        let short_cvv = PaymentMethod::card("4111111111111111", "1227", "12", "Asha Devi");
        assert!(!short_cvv.is_valid());
    }

    #[test]
    fn test_upi_validation() {
        assert!(PaymentMethod::upi("asha@upi").is_valid());
        assert!(!PaymentMethod::upi("a@upi").is_valid());
        assert!(!PaymentMethod::upi("ashadevi").is_valid());
    }

    #[test]
    fn test_cod_always_valid() {
        assert!(PaymentMethod::CashOnDelivery.is_valid());
    }

    #[tokio::test]
    async fn test_gateway_always_succeeds() {
        let gateway = SimulatedGateway::new().with_processing_delay(Duration::from_millis(5));
        let request = PaymentRequest::new(Money::from_rupees(130), PaymentMethod::CashOnDelivery);

        let receipt = gateway.process(&request).await.unwrap();
        assert_eq!(receipt.amount, Money::from_rupees(130));
        assert_eq!(receipt.method, "cod");
    }

    #[tokio::test]
    async fn test_gateway_rejects_invalid_form() {
        let gateway = SimulatedGateway::new().with_processing_delay(Duration::from_millis(5));
        let request = PaymentRequest::new(
            Money::from_rupees(130),
            PaymentMethod::upi("no-at-sign"),
        );

        assert!(matches!(
            gateway.process(&request).await,
            Err(StoreError::InvalidPayment(_))
        ));
    }

    #[tokio::test]
    async fn test_gateway_waits_configured_delay() {
        let delay = Duration::from_millis(40);
        let gateway = SimulatedGateway::new().with_processing_delay(delay);
        let request = PaymentRequest::new(Money::from_rupees(90), PaymentMethod::CashOnDelivery);

        let started = std::time::Instant::now();
        gateway.process(&request).await.unwrap();
        assert!(started.elapsed() >= delay);
    }
}
