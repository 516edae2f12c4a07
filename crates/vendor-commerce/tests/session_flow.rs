//! End-to-end storefront session tests against the public API.

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use vendor_commerce::checkout::generate_order_number;
use vendor_commerce::prelude::*;

fn catalog() -> Vec<Product> {
    vec![
        Product::new(
            "1",
            LocalizedName::new("Fresh Onions", "ताज़ा प्याज", "வெங்காயம்"),
            Money::from_rupees(25),
            Money::from_rupees(30),
            "per kg",
            4.5,
            ProductCategory::Vegetables,
            "🧅",
        ),
        Product::new(
            "2",
            LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
            Money::from_rupees(40),
            Money::from_rupees(35),
            "per kg",
            4.2,
            ProductCategory::Vegetables,
            "🍅",
        ),
        Product::new(
            "6",
            LocalizedName::new("Fresh Bananas", "ताज़े केले", "வாழைப்பழம்"),
            Money::from_rupees(50),
            Money::from_rupees(55),
            "per dozen",
            4.4,
            ProductCategory::Fruits,
            "🍌",
        )
        .out_of_stock(),
    ]
}

fn ordered_items(cart: &Cart) -> Vec<vendor_commerce::checkout::OrderedItem> {
    cart.lines
        .iter()
        .map(|line| vendor_commerce::checkout::OrderedItem {
            name: line.product.name.en.clone(),
            name_hi: line.product.name.hi.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            unit: line.product.unit.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// browsing and cart edits
// ---------------------------------------------------------------------------

#[test]
fn cart_edits_flow_through_session_events() {
    let catalog = catalog();
    let mut session = Session::new();

    assert_eq!(session.active_tab, StoreTab::Products);
    assert!(session.cart.is_empty());

    session.apply(SessionEvent::SetLanguage(Language::Hi));
    session.apply(SessionEvent::SelectTab(StoreTab::Visual));
    assert_eq!(session.active_tab.label(session.language), "विज़ुअल");

    // Two taps on onions merge into one line; tomatoes get their own.
    session.apply(SessionEvent::AddToCart {
        product: catalog[0].clone(),
        quantity: 1,
    });
    session.apply(SessionEvent::AddToCart {
        product: catalog[0].clone(),
        quantity: 1,
    });
    session.apply(SessionEvent::AddToCart {
        product: catalog[1].clone(),
        quantity: 1,
    });
    assert_eq!(session.cart.line_count(), 2);
    assert_eq!(session.cart.total_items(), 3);
    assert_eq!(session.cart.subtotal(), Money::from_rupees(90));

    // Stepping a line down to zero removes it.
    session.apply(SessionEvent::UpdateQuantity {
        product_id: catalog[1].id.clone(),
        quantity: 0,
    });
    assert_eq!(session.cart.line_count(), 1);
    assert_eq!(session.cart.subtotal(), Money::from_rupees(50));
}

#[test]
fn out_of_stock_and_zero_quantity_adds_are_ignored() {
    let catalog = catalog();
    let mut session = Session::new();

    session.apply(SessionEvent::AddToCart {
        product: catalog[2].clone(),
        quantity: 1,
    });
    session.apply(SessionEvent::AddToCart {
        product: catalog[0].clone(),
        quantity: 0,
    });
    assert!(session.cart.is_empty());
}

// ---------------------------------------------------------------------------
// checkout
// ---------------------------------------------------------------------------

#[test]
fn checkout_is_blocked_until_cart_has_items() {
    let catalog = catalog();
    let mut session = Session::new();

    session.apply(SessionEvent::BeginCheckout);
    assert_eq!(session.overlay, Overlay::None);

    session.apply(SessionEvent::AddToCart {
        product: catalog[0].clone(),
        quantity: 2,
    });
    session.apply(SessionEvent::OpenCart);
    assert_eq!(session.overlay, Overlay::Cart);
    session.apply(SessionEvent::BeginCheckout);
    assert_eq!(session.overlay, Overlay::Payment);
}

#[tokio::test]
async fn full_purchase_flow_clears_cart_and_shows_confirmation() {
    let catalog = catalog();
    let mut session = Session::new();

    session.apply(SessionEvent::AddToCart {
        product: catalog[0].clone(),
        quantity: 2,
    });
    session.apply(SessionEvent::AddToCart {
        product: catalog[1].clone(),
        quantity: 1,
    });
    session.apply(SessionEvent::OpenCart);
    session.apply(SessionEvent::BeginCheckout);

    // ₹90 subtotal is under the free-delivery bar, so the fee applies.
    let pricing = session.cart.pricing(&DeliveryPolicy::default());
    assert_eq!(pricing.subtotal, Money::from_rupees(90));
    assert_eq!(pricing.delivery_fee, Money::from_rupees(40));
    assert_eq!(pricing.total, Money::from_rupees(130));

    let gateway = SimulatedGateway::new().with_processing_delay(std::time::Duration::from_millis(5));
    let request = PaymentRequest::new(pricing.total, PaymentMethod::upi("ravi@upi"));
    let receipt = gateway.process(&request).await.unwrap();
    assert_eq!(receipt.amount, pricing.total);
    assert_eq!(receipt.method, "upi");

    let mut rng = StdRng::seed_from_u64(7);
    let confirmation = OrderConfirmation::new(
        generate_order_number(&mut rng),
        receipt.amount,
        Utc::now(),
        ordered_items(&session.cart),
    );
    assert!(confirmation.order_number.as_str().starts_with("VC"));
    assert_eq!(confirmation.items.len(), 2);

    session.apply(SessionEvent::PaymentSucceeded {
        receipt,
        confirmation: confirmation.clone(),
    });
    assert!(session.cart.is_empty());
    match session.overlay {
        Overlay::Success(ref shown) => {
            assert_eq!(shown.order_number, confirmation.order_number);
            assert_eq!(shown.amount, Money::from_rupees(130));
        }
        ref other => panic!("expected success overlay, got {other:?}"),
    }

    // Closing the overlay returns to browsing with an empty cart.
    session.apply(SessionEvent::CloseOverlay);
    assert_eq!(session.overlay, Overlay::None);
    assert_eq!(session.cart.total_items(), 0);
}

#[tokio::test]
async fn payment_rejects_malformed_card_before_charging() {
    let gateway = SimulatedGateway::new().with_processing_delay(std::time::Duration::from_millis(5));
    let method = PaymentMethod::card("4111", "13", "9", "");
    let request = PaymentRequest::new(Money::from_rupees(130), method);
    assert!(gateway.process(&request).await.is_err());
}
