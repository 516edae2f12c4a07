//! Price alerts and notification settings.
//!
//! Alerts watch a product for a price crossing and would notify the
//! vendor over WhatsApp or SMS. Nothing is actually sent; the alert
//! center models the list, the toggles, and the decision rule.

use crate::catalog::Language;
use crate::error::StoreError;
use crate::ids::AlertId;
use crate::money::Money;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Which way the price must move to fire the alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AlertDirection {
    #[default]
    Below,
    Above,
}

impl AlertDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertDirection::Below => "below",
            AlertDirection::Above => "above",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "below" => Some(AlertDirection::Below),
            "above" => Some(AlertDirection::Above),
            _ => None,
        }
    }

    /// Badge label next to the target price.
    pub fn label(&self) -> &'static str {
        match self {
            AlertDirection::Below => "Below",
            AlertDirection::Above => "Above",
        }
    }
}

/// Where the notification would be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AlertChannel {
    #[default]
    Whatsapp,
    Sms,
    Both,
}

impl AlertChannel {
    pub fn as_str(&self) -> &'static str {
        match self {
            AlertChannel::Whatsapp => "whatsapp",
            AlertChannel::Sms => "sms",
            AlertChannel::Both => "both",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "whatsapp" => Some(AlertChannel::Whatsapp),
            "sms" => Some(AlertChannel::Sms),
            "both" => Some(AlertChannel::Both),
            _ => None,
        }
    }

    /// The "Notify via" label. Single channels show their raw id.
    pub fn label(&self) -> &'static str {
        match self {
            AlertChannel::Whatsapp => "whatsapp",
            AlertChannel::Sms => "sms",
            AlertChannel::Both => "WhatsApp + SMS",
        }
    }
}

/// A price alert for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceAlert {
    /// Unique alert identifier.
    pub id: AlertId,
    /// English product name.
    pub product_name: String,
    /// Hindi product name.
    pub product_name_hi: String,
    /// Price observed when the alert was created.
    pub current_price: Money,
    /// Price that fires the alert.
    pub target_price: Money,
    /// Fire on a drop below or a rise above the target.
    pub direction: AlertDirection,
    /// Delivery channel.
    pub channel: AlertChannel,
    /// Paused alerts stay listed but never fire.
    pub is_active: bool,
}

impl PriceAlert {
    /// The display name in the given language.
    pub fn display_name(&self, lang: Language) -> &str {
        match lang {
            Language::Hi => &self.product_name_hi,
            _ => &self.product_name,
        }
    }

    /// Flip between active and paused.
    pub fn toggle(&mut self) {
        self.is_active = !self.is_active;
    }

    /// Whether an observed price would fire this alert.
    ///
    /// An exact hit on the target counts for both directions.
    pub fn should_fire(&self, observed: &Money) -> bool {
        if !self.is_active {
            return false;
        }
        match self.direction {
            AlertDirection::Below => observed.amount_paise <= self.target_price.amount_paise,
            AlertDirection::Above => observed.amount_paise >= self.target_price.amount_paise,
        }
    }
}

/// Notification preferences and the contact number alerts go to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    /// WhatsApp/SMS number.
    pub phone: String,
    pub daily_updates: bool,
    pub price_drops: bool,
    pub new_deals: bool,
    pub weekly_report: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            phone: "+91 98765 43210".to_string(),
            daily_updates: true,
            price_drops: true,
            new_deals: true,
            weekly_report: false,
        }
    }
}

/// Confirmation copy for the test-alert button. No message is sent.
pub const TEST_ALERT_SENT: &str = "Test alert sent! You will receive notification shortly.";

/// The vendor's alert list plus notification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AlertCenter {
    pub alerts: Vec<PriceAlert>,
    pub settings: NotificationSettings,
}

impl AlertCenter {
    pub fn new(alerts: Vec<PriceAlert>) -> Self {
        Self {
            alerts,
            settings: NotificationSettings::default(),
        }
    }

    /// Create an alert from form input.
    ///
    /// The product name must be non-blank and the target price positive.
    /// The current price is mocked uniformly in ₹10–₹59; a real build
    /// would look it up. Returns the new alert's id.
    pub fn create<R: Rng>(
        &mut self,
        product_name: &str,
        target_price: Money,
        direction: AlertDirection,
        channel: AlertChannel,
        rng: &mut R,
    ) -> Result<AlertId, StoreError> {
        let product_name = product_name.trim();
        if product_name.is_empty() {
            return Err(StoreError::InvalidAlert("product name required".to_string()));
        }
        if !target_price.is_positive() {
            return Err(StoreError::InvalidAlert(
                "target price must be positive".to_string(),
            ));
        }

        let alert = PriceAlert {
            id: AlertId::generate(),
            product_name: product_name.to_string(),
            // Translation would happen server-side; mirror the input.
            product_name_hi: product_name.to_string(),
            current_price: Money::from_rupees(rng.gen_range(10..60)),
            target_price,
            direction,
            channel,
            is_active: true,
        };
        let id = alert.id.clone();
        tracing::debug!(alert = %id, product = product_name, "alert created");
        self.alerts.push(alert);
        Ok(id)
    }

    /// Flip an alert between active and paused. Returns the new state.
    pub fn toggle(&mut self, id: &AlertId) -> Result<bool, StoreError> {
        let alert = self
            .alerts
            .iter_mut()
            .find(|a| &a.id == id)
            .ok_or_else(|| StoreError::AlertNotFound(id.to_string()))?;
        alert.toggle();
        Ok(alert.is_active)
    }

    /// Remove an alert from the list.
    pub fn remove(&mut self, id: &AlertId) -> Result<PriceAlert, StoreError> {
        let pos = self
            .alerts
            .iter()
            .position(|a| &a.id == id)
            .ok_or_else(|| StoreError::AlertNotFound(id.to_string()))?;
        Ok(self.alerts.remove(pos))
    }

    /// Get an alert by id.
    pub fn get(&self, id: &AlertId) -> Option<&PriceAlert> {
        self.alerts.iter().find(|a| &a.id == id)
    }

    /// Alerts currently active.
    pub fn active_count(&self) -> usize {
        self.alerts.iter().filter(|a| a.is_active).count()
    }

    /// Pretend to send a test notification to the configured number.
    pub fn send_test_alert(&self) -> &'static str {
        tracing::info!(phone = %self.settings.phone, "test alert requested");
        TEST_ALERT_SENT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn onion_alert() -> PriceAlert {
        PriceAlert {
            id: AlertId::new("1"),
            product_name: "Onions".to_string(),
            product_name_hi: "प्याज".to_string(),
            current_price: Money::from_rupees(25),
            target_price: Money::from_rupees(20),
            direction: AlertDirection::Below,
            channel: AlertChannel::Whatsapp,
            is_active: true,
        }
    }

    #[test]
    fn test_below_alert_fires_at_or_under_target() {
        let alert = onion_alert();
        assert!(alert.should_fire(&Money::from_rupees(19)));
        assert!(alert.should_fire(&Money::from_rupees(20)));
        assert!(!alert.should_fire(&Money::from_rupees(21)));
    }

    #[test]
    fn test_above_alert_fires_at_or_over_target() {
        let mut alert = onion_alert();
        alert.direction = AlertDirection::Above;
        alert.target_price = Money::from_rupees(50);
        assert!(alert.should_fire(&Money::from_rupees(50)));
        assert!(alert.should_fire(&Money::from_rupees(55)));
        assert!(!alert.should_fire(&Money::from_rupees(49)));
    }

    #[test]
    fn test_paused_alert_never_fires() {
        let mut alert = onion_alert();
        alert.toggle();
        assert!(!alert.is_active);
        assert!(!alert.should_fire(&Money::from_rupees(10)));
    }

    #[test]
    fn test_create_requires_name_and_positive_target() {
        let mut center = AlertCenter::default();
        let mut rng = StdRng::seed_from_u64(7);

        let err = center.create(
            "   ",
            Money::from_rupees(20),
            AlertDirection::Below,
            AlertChannel::Sms,
            &mut rng,
        );
        assert!(matches!(err, Err(StoreError::InvalidAlert(_))));

        let err = center.create(
            "Potatoes",
            Money::from_rupees(0),
            AlertDirection::Below,
            AlertChannel::Sms,
            &mut rng,
        );
        assert!(matches!(err, Err(StoreError::InvalidAlert(_))));
        assert!(center.alerts.is_empty());
    }

    #[test]
    fn test_create_mocks_price_in_range() {
        let mut center = AlertCenter::default();
        let mut rng = StdRng::seed_from_u64(7);
        for i in 0..50 {
            let id = center
                .create(
                    &format!("Product {i}"),
                    Money::from_rupees(30),
                    AlertDirection::Below,
                    AlertChannel::Both,
                    &mut rng,
                )
                .unwrap();
            let price = center.get(&id).unwrap().current_price;
            assert!(price.amount_paise >= 1000 && price.amount_paise < 6000);
        }
    }

    #[test]
    fn test_toggle_and_remove() {
        let mut center = AlertCenter::new(vec![onion_alert()]);
        let id = AlertId::new("1");

        assert!(!center.toggle(&id).unwrap());
        assert_eq!(center.active_count(), 0);
        assert!(center.toggle(&id).unwrap());
        assert_eq!(center.active_count(), 1);

        let removed = center.remove(&id).unwrap();
        assert_eq!(removed.product_name, "Onions");
        assert!(center.alerts.is_empty());
        assert!(matches!(
            center.remove(&id),
            Err(StoreError::AlertNotFound(_))
        ));
    }

    #[test]
    fn test_channel_labels() {
        assert_eq!(AlertChannel::Both.label(), "WhatsApp + SMS");
        assert_eq!(AlertChannel::Whatsapp.label(), "whatsapp");
    }

    #[test]
    fn test_default_settings() {
        let settings = NotificationSettings::default();
        assert_eq!(settings.phone, "+91 98765 43210");
        assert!(settings.daily_updates);
        assert!(settings.price_drops);
        assert!(settings.new_deals);
        assert!(!settings.weekly_report);
    }
}
