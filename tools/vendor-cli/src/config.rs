//! CLI configuration.

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use vendor_commerce::cart::DeliveryPolicy;
use vendor_commerce::catalog::Language;
use vendor_commerce::checkout::SimulatedGateway;
use vendor_commerce::Money;

/// CLI configuration file (vendor.toml).
///
/// Every field has a default that mirrors the storefront's built-in
/// behavior, so running without a config file changes nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VendorConfig {
    /// Store identity.
    #[serde(default)]
    pub store: StoreConfig,

    /// Delivery fee policy.
    #[serde(default)]
    pub delivery: DeliveryConfig,

    /// Simulated gateway settings.
    #[serde(default)]
    pub payment: PaymentConfig,

    /// Connectivity badge simulation.
    #[serde(default)]
    pub connectivity: ConnectivityConfig,
}

impl VendorConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse TOML config: {}", path))
    }

    /// The configured display language, falling back to English.
    pub fn display_language(&self) -> Language {
        Language::from_code(&self.store.language).unwrap_or_default()
    }

    /// The delivery policy commands price carts with.
    pub fn delivery_policy(&self) -> DeliveryPolicy {
        DeliveryPolicy::new(
            Money::from_rupees(self.delivery.fee_rupees),
            Money::from_rupees(self.delivery.free_threshold_rupees),
        )
    }

    /// The simulated gateway with the configured processing delay.
    pub fn gateway(&self) -> SimulatedGateway {
        SimulatedGateway::new()
            .with_processing_delay(Duration::from_millis(self.payment.processing_delay_ms))
    }
}

/// Store identity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store name shown in headers.
    #[serde(default = "default_store_name")]
    pub name: String,

    /// Default display language code (en, hi, ta, te, kn, mr).
    #[serde(default = "default_language")]
    pub language: String,
}

fn default_store_name() -> String {
    "VendorConnect".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            name: default_store_name(),
            language: default_language(),
        }
    }
}

/// Delivery fee policy, in whole rupees.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeliveryConfig {
    /// Flat delivery fee.
    #[serde(default = "default_fee_rupees")]
    pub fee_rupees: i64,

    /// Subtotal above which delivery is free.
    #[serde(default = "default_free_threshold_rupees")]
    pub free_threshold_rupees: i64,
}

fn default_fee_rupees() -> i64 {
    40
}

fn default_free_threshold_rupees() -> i64 {
    500
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            fee_rupees: default_fee_rupees(),
            free_threshold_rupees: default_free_threshold_rupees(),
        }
    }
}

/// Simulated gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Fixed processing delay in milliseconds.
    #[serde(default = "default_processing_delay_ms")]
    pub processing_delay_ms: u64,
}

fn default_processing_delay_ms() -> u64 {
    3000
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            processing_delay_ms: default_processing_delay_ms(),
        }
    }
}

/// Connectivity badge simulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectivityConfig {
    /// Seconds between badge re-samples.
    #[serde(default = "default_interval_secs")]
    pub interval_secs: u64,

    /// Chance a sample comes up offline (0.0 to 1.0).
    #[serde(default = "default_offline_probability")]
    pub offline_probability: f64,
}

fn default_interval_secs() -> u64 {
    10
}

fn default_offline_probability() -> f64 {
    0.1
}

impl Default for ConnectivityConfig {
    fn default() -> Self {
        Self {
            interval_secs: default_interval_secs(),
            offline_probability: default_offline_probability(),
        }
    }
}

/// Generate a default vendor.toml config file.
pub fn generate_default_config(name: &str) -> String {
    format!(
        r#"# VendorConnect storefront configuration

[store]
name = "{name}"
# Display language: en, hi, ta, te, kn, mr
language = "en"

[delivery]
fee_rupees = 40
free_threshold_rupees = 500

[payment]
# The simulated gateway always succeeds after this delay.
processing_delay_ms = 3000

[connectivity]
interval_secs = 10
offline_probability = 0.1
"#,
        name = name
    )
}
