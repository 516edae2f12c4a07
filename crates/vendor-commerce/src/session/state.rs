//! Session state and the event reducer.

use crate::cart::Cart;
use crate::catalog::{Language, Product};
use crate::checkout::{OrderConfirmation, PaymentReceipt};
use crate::ids::ProductId;
use serde::{Deserialize, Serialize};

/// The storefront's main tabs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum StoreTab {
    #[default]
    Products,
    Visual,
    Voice,
    Bulk,
    Alerts,
}

impl StoreTab {
    /// All tabs in nav order.
    pub const ALL: [StoreTab; 5] = [
        StoreTab::Products,
        StoreTab::Visual,
        StoreTab::Voice,
        StoreTab::Bulk,
        StoreTab::Alerts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StoreTab::Products => "products",
            StoreTab::Visual => "visual",
            StoreTab::Voice => "voice",
            StoreTab::Bulk => "bulk",
            StoreTab::Alerts => "alerts",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "products" => Some(StoreTab::Products),
            "visual" => Some(StoreTab::Visual),
            "voice" => Some(StoreTab::Voice),
            "bulk" => Some(StoreTab::Bulk),
            "alerts" => Some(StoreTab::Alerts),
            _ => None,
        }
    }

    /// Tab label in the given language.
    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (StoreTab::Products, Language::Hi) => "उत्पाद",
            (StoreTab::Products, _) => "Products",
            (StoreTab::Visual, Language::Hi) => "विज़ुअल",
            (StoreTab::Visual, _) => "Visual",
            (StoreTab::Voice, Language::Hi) => "आवाज़",
            (StoreTab::Voice, _) => "Voice",
            (StoreTab::Bulk, Language::Hi) => "थोक",
            (StoreTab::Bulk, _) => "Bulk",
            (StoreTab::Alerts, Language::Hi) => "अलर्ट",
            (StoreTab::Alerts, _) => "Alerts",
        }
    }
}

/// Which overlay sits on top of the active tab, if any.
///
/// The flow is linear: cart panel, then payment, then the success view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Overlay {
    #[default]
    None,
    Cart,
    Payment,
    Success(OrderConfirmation),
}

impl Overlay {
    pub fn is_none(&self) -> bool {
        matches!(self, Overlay::None)
    }
}

/// A user action applied to the session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionEvent {
    /// Switch the active tab.
    SelectTab(StoreTab),
    /// Switch the display language.
    SetLanguage(Language),
    /// Add units of a product to the cart (quantity from a stepper).
    AddToCart { product: Product, quantity: u32 },
    /// Set a cart line's quantity; zero removes the line.
    UpdateQuantity { product_id: ProductId, quantity: u32 },
    /// Open the cart panel.
    OpenCart,
    /// Close whatever overlay is open.
    CloseOverlay,
    /// Move from the cart panel to the payment form.
    BeginCheckout,
    /// The gateway reported success; show the confirmation.
    PaymentSucceeded {
        receipt: PaymentReceipt,
        confirmation: OrderConfirmation,
    },
    /// The periodic connectivity sampler produced a new value.
    ConnectivityChanged(bool),
}

/// One vendor's storefront session.
///
/// All fields are in-memory only and reset on restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Display language.
    pub language: Language,
    /// Active tab.
    pub active_tab: StoreTab,
    /// The shopping cart.
    pub cart: Cart,
    /// Overlay on top of the tab content.
    pub overlay: Overlay,
    /// Displayed connectivity state. Cosmetic only.
    pub is_online: bool,
    /// Whether the bell shows the notification dot.
    pub has_notifications: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            language: Language::En,
            active_tab: StoreTab::Products,
            cart: Cart::new(),
            overlay: Overlay::None,
            is_online: true,
            has_notifications: true,
        }
    }

    /// Apply a user event.
    ///
    /// Quantity handling never fails: out-of-stock adds and zero-quantity
    /// adds are ignored the way disabled buttons ignore clicks, and
    /// checkout on an empty cart is a no-op.
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::SelectTab(tab) => {
                self.active_tab = tab;
            }
            SessionEvent::SetLanguage(lang) => {
                self.language = lang;
            }
            SessionEvent::AddToCart { product, quantity } => {
                if let Err(err) = self.cart.add_qty(&product, quantity) {
                    tracing::debug!(%err, "add to cart ignored");
                }
            }
            SessionEvent::UpdateQuantity {
                product_id,
                quantity,
            } => {
                self.cart.update_quantity(&product_id, quantity);
            }
            SessionEvent::OpenCart => {
                self.overlay = Overlay::Cart;
            }
            SessionEvent::CloseOverlay => {
                self.overlay = Overlay::None;
            }
            SessionEvent::BeginCheckout => {
                if !self.cart.is_empty() {
                    self.overlay = Overlay::Payment;
                }
            }
            SessionEvent::PaymentSucceeded {
                receipt,
                confirmation,
            } => {
                tracing::info!(payment = %receipt.payment_id, order = %confirmation.order_number, "order placed");
                self.cart.clear();
                self.overlay = Overlay::Success(confirmation);
            }
            SessionEvent::ConnectivityChanged(online) => {
                self.is_online = online;
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LocalizedName, ProductCategory};
    use crate::checkout::{generate_order_number, OrderConfirmation};
    use crate::ids::PaymentId;
    use crate::money::Money;
    use chrono::Utc;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

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

    fn paid_event(amount: Money) -> SessionEvent {
        let mut rng = StdRng::seed_from_u64(1);
        SessionEvent::PaymentSucceeded {
            receipt: PaymentReceipt {
                payment_id: PaymentId::generate(),
                method: "cod".to_string(),
                amount,
                paid_at: Utc::now(),
            },
            confirmation: OrderConfirmation::new(
                generate_order_number(&mut rng),
                amount,
                Utc::now(),
                Vec::new(),
            ),
        }
    }

    #[test]
    fn test_defaults() {
        let session = Session::new();
        assert_eq!(session.language, Language::En);
        assert_eq!(session.active_tab, StoreTab::Products);
        assert!(session.is_online);
        assert!(session.has_notifications);
        assert!(session.overlay.is_none());
    }

    #[test]
    fn test_tab_and_language_events() {
        let mut session = Session::new();
        session.apply(SessionEvent::SelectTab(StoreTab::Bulk));
        session.apply(SessionEvent::SetLanguage(Language::Hi));
        assert_eq!(session.active_tab, StoreTab::Bulk);
        assert_eq!(session.language, Language::Hi);
    }

    #[test]
    fn test_add_merges_into_existing_line() {
        let mut session = Session::new();
        let p = onions();
        session.apply(SessionEvent::AddToCart {
            product: p.clone(),
            quantity: 1,
        });
        session.apply(SessionEvent::AddToCart {
            product: p.clone(),
            quantity: 1,
        });
        assert_eq!(session.cart.get_line(&p.id).unwrap().quantity, 2);
    }

    #[test]
    fn test_out_of_stock_add_is_ignored() {
        let mut session = Session::new();
        session.apply(SessionEvent::AddToCart {
            product: onions().out_of_stock(),
            quantity: 1,
        });
        assert!(session.cart.is_empty());
    }

    #[test]
    fn test_checkout_requires_items() {
        let mut session = Session::new();
        session.apply(SessionEvent::OpenCart);
        session.apply(SessionEvent::BeginCheckout);
        assert_eq!(session.overlay, Overlay::Cart);

        session.apply(SessionEvent::AddToCart {
            product: onions(),
            quantity: 2,
        });
        session.apply(SessionEvent::BeginCheckout);
        assert_eq!(session.overlay, Overlay::Payment);
    }

    #[test]
    fn test_payment_success_clears_cart_and_shows_confirmation() {
        let mut session = Session::new();
        session.apply(SessionEvent::AddToCart {
            product: onions(),
            quantity: 2,
        });
        session.apply(SessionEvent::OpenCart);
        session.apply(SessionEvent::BeginCheckout);
        session.apply(paid_event(Money::from_rupees(90)));

        assert!(session.cart.is_empty());
        assert!(matches!(session.overlay, Overlay::Success(_)));

        session.apply(SessionEvent::CloseOverlay);
        assert!(session.overlay.is_none());
    }

    #[test]
    fn test_connectivity_event_is_cosmetic() {
        let mut session = Session::new();
        session.apply(SessionEvent::AddToCart {
            product: onions(),
            quantity: 1,
        });
        session.apply(SessionEvent::ConnectivityChanged(false));
        assert!(!session.is_online);
        // Going offline changes nothing else.
        assert_eq!(session.cart.total_items(), 1);
        session.apply(SessionEvent::BeginCheckout);
        assert_eq!(session.overlay, Overlay::Payment);
    }

    #[test]
    fn test_tab_labels() {
        assert_eq!(StoreTab::Bulk.label(Language::En), "Bulk");
        assert_eq!(StoreTab::Bulk.label(Language::Hi), "थोक");
        assert_eq!(StoreTab::from_str("voice"), Some(StoreTab::Voice));
    }
}
