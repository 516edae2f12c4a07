//! CLI command implementations.

pub mod alerts;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod pools;
pub mod render;
pub mod shop;

use anyhow::{anyhow, Result};
use clap::{Args, Subcommand};
use vendor_commerce::catalog::Language;

use crate::context::Context;

#[derive(Args)]
pub struct CatalogArgs {
    /// Display language for product names (en, hi, ta, te, kn, mr)
    #[arg(short, long)]
    pub lang: Option<String>,

    /// Only show one category (vegetables, fruits, grains, spices)
    #[arg(long)]
    pub category: Option<String>,

    /// Include wholesale bulk listings
    #[arg(short, long)]
    pub bulk: bool,
}

#[derive(Args)]
pub struct PoolsArgs {
    /// Join the pool with this id before listing
    #[arg(long)]
    pub join: Option<String>,

    /// Quantity in kg to contribute when joining
    #[arg(short, long, default_value = "10")]
    pub quantity: u32,

    /// Display language for product names (en, hi, ta, te, kn, mr)
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[derive(Args)]
pub struct AlertsArgs {
    #[command(subcommand)]
    pub command: Option<AlertsCommand>,
}

#[derive(Subcommand)]
pub enum AlertsCommand {
    /// List price alerts and notification settings
    List,
    /// Create a new price alert
    Add {
        /// Product name to watch
        product: String,

        /// Target price in rupees
        #[arg(short, long)]
        target: i64,

        /// Fire when the price moves below or above the target
        #[arg(short, long, default_value = "below")]
        direction: String,

        /// Notification channel (whatsapp, sms, both)
        #[arg(short, long, default_value = "whatsapp")]
        channel: String,
    },
    /// Pause or resume an alert
    Toggle {
        /// Alert id
        id: String,
    },
    /// Remove an alert
    Remove {
        /// Alert id
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Send a test notification
    Test,
}

#[derive(Args)]
pub struct ShopArgs {
    /// Display language for the session (en, hi, ta, te, kn, mr)
    #[arg(short, long)]
    pub lang: Option<String>,
}

#[derive(Args)]
pub struct CheckoutArgs {
    /// Payment method (card, upi, cod)
    #[arg(short, long, default_value = "upi")]
    pub method: String,

    /// UPI id to pay with
    #[arg(long, default_value = "vendor@paytm")]
    pub upi_id: String,

    /// Card number
    #[arg(long, default_value = "4111 1111 1111 1111")]
    pub card_number: String,

    /// Card expiry (MM/YY)
    #[arg(long, default_value = "12/26")]
    pub expiry: String,

    /// Card CVV
    #[arg(long, default_value = "123")]
    pub cvv: String,

    /// Card holder name
    #[arg(long, default_value = "Ramesh Kumar")]
    pub holder: String,

    /// Seed the cart with <product-id>:<quantity> lines
    #[arg(short, long)]
    pub item: Vec<String>,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

#[derive(Args)]
pub struct RenderArgs {
    /// Output directory for the rendered pages
    #[arg(short, long, default_value = "storefront-out")]
    pub out: String,

    /// Languages to render (defaults to en and hi)
    #[arg(short, long)]
    pub lang: Vec<String>,

    /// Overwrite an existing output directory
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show,
    /// Initialize a new configuration file
    Init {
        /// Overwrite existing config
        #[arg(short, long)]
        force: bool,
    },
}

/// Pick the display language from a flag, falling back to the config.
pub(crate) fn resolve_language(flag: Option<&str>, ctx: &Context) -> Result<Language> {
    match flag {
        Some(code) => Language::from_code(code).ok_or_else(|| {
            anyhow!("Unknown language code: {} (expected one of en, hi, ta, te, kn, mr)", code)
        }),
        None => Ok(ctx.config.display_language()),
    }
}
