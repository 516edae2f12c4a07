//! Cart overlay and floating cart button.

use vendor_commerce::cart::{Cart, DeliveryPolicy};
use vendor_commerce::catalog::Language;

/// Render the floating cart button. Empty string while the cart is
/// empty, matching the button only appearing once something is added.
pub fn render_cart_button(cart: &Cart) -> String {
    if cart.is_empty() {
        return String::new();
    }
    format!(
        r#"<button class="cart-fab" data-section="cart-button">🛒<span class="cart-fab-badge">{}</span></button>"#,
        cart.total_items()
    )
}

/// Render the cart overlay with line items and the price breakdown.
pub fn render_cart_panel(cart: &Cart, policy: &DeliveryPolicy, lang: Language) -> String {
    let (title, items_word) = match lang {
        Language::Hi => ("आपका कार्ट", "आइटम"),
        _ => ("Your Cart", "items"),
    };

    if cart.is_empty() {
        let empty = match lang {
            Language::Hi => "आपका कार्ट खाली है",
            _ => "Your cart is empty",
        };
        return format!(
            r#"<aside class="cart-panel" data-section="cart">
    <div class="panel-heading"><h2>🛍️ {title}</h2><button class="btn-close">✕</button></div>
    <p class="cart-empty">{empty}</p>
</aside>"#
        );
    }

    let rows: String = cart
        .lines
        .iter()
        .map(|line| {
            format!(
                r#"<div class="cart-row" data-product-id="{id}">
        <span class="card-emoji">{emoji}</span>
        <div class="cart-row-info"><h4>{name}</h4><p>{price} {unit}</p></div>
        <div class="stepper">
            <button class="btn-step">−</button>
            <span class="stepper-value">{quantity}</span>
            <button class="btn-step">+</button>
        </div>
        <span class="cart-row-total">{line_total}</span>
    </div>"#,
                id = line.product.id,
                emoji = line.product.emoji,
                name = escape_html(line.product.display_name(lang)),
                price = line.product.price.display(),
                unit = escape_html(&line.product.unit),
                quantity = line.quantity,
                line_total = line.line_total().display_fixed()
            )
        })
        .collect();

    let pricing = cart.pricing(policy);
    let labels = match lang {
        Language::Hi => ["उप-योग", "डिलीवरी शुल्क", "मुफ्त", "कुल योग"],
        _ => ["Subtotal", "Delivery Fee", "Free", "Total"],
    };
    let free_badge = if pricing.free_delivery() {
        format!(r#" <span class="badge badge--free">{}</span>"#, labels[2])
    } else {
        String::new()
    };

    let gap_hint = match policy.amount_to_free_delivery(&pricing.subtotal) {
        Some(gap) => {
            let hint = match lang {
                Language::Hi => format!("{} और खरीदें और मुफ्त डिलीवरी पाएं!", gap.display_fixed()),
                _ => format!("Add {} more for free delivery!", gap.display_fixed()),
            };
            format!(r#"<div class="free-delivery-hint">🚚 {hint}</div>"#)
        }
        None => String::new(),
    };

    let (checkout_label, secure_label, fast_label) = match lang {
        Language::Hi => ("चेकआउट करें", "सुरक्षित भुगतान", "तेज़ डिलीवरी"),
        _ => ("Proceed to Checkout", "Secure Payment", "Fast Delivery"),
    };

    format!(
        r#"<aside class="cart-panel" data-section="cart">
    <div class="panel-heading">
        <h2>🛍️ {title} <span class="badge">{line_count} {items_word}</span></h2>
        <button class="btn-close">✕</button>
    </div>
    <div class="cart-rows">{rows}</div>
    <div class="price-breakdown">
        <div class="breakdown-line"><span>{subtotal_label}</span><span>{subtotal}</span></div>
        <div class="breakdown-line"><span>🚚 {fee_label}{free_badge}</span><span>{fee}</span></div>
        <div class="breakdown-line breakdown-line--total"><span>{total_label}</span><span>{total}</span></div>
    </div>
    {gap_hint}
    <button class="btn-checkout">💳 {checkout_label}</button>
    <p class="trust-row">🛡️ {secure_label} · 🚚 {fast_label}</p>
</aside>"#,
        title = title,
        line_count = cart.line_count(),
        items_word = items_word,
        rows = rows,
        subtotal_label = labels[0],
        subtotal = pricing.subtotal.display_fixed(),
        fee_label = labels[1],
        free_badge = free_badge,
        fee = pricing.delivery_fee.display_fixed(),
        total_label = labels[3],
        total = pricing.total.display_fixed(),
        gap_hint = gap_hint,
        checkout_label = checkout_label,
        secure_label = secure_label,
        fast_label = fast_label
    )
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendor_commerce::catalog::{LocalizedName, Product, ProductCategory};
    use vendor_commerce::Money;

    fn cart_with(rupees: i64, quantity: u32) -> Cart {
        let product = Product::new(
            "1",
            LocalizedName::new("Fresh Onions", "ताज़ा प्याज", "வெங்காயம்"),
            Money::from_rupees(rupees),
            Money::from_rupees(rupees),
            "per kg",
            4.5,
            ProductCategory::Vegetables,
            "🧅",
        );
        let mut cart = Cart::new();
        cart.add_qty(&product, quantity).unwrap();
        cart
    }

    #[test]
    fn test_button_hidden_for_empty_cart() {
        assert_eq!(render_cart_button(&Cart::new()), "");
        let html = render_cart_button(&cart_with(25, 3));
        assert!(html.contains(">3</span>"));
    }

    #[test]
    fn test_small_order_shows_fee_and_gap_hint() {
        let html = render_cart_panel(&cart_with(25, 2), &DeliveryPolicy::default(), Language::En);
        assert!(html.contains("₹40.00"));
        assert!(html.contains("Add ₹450.00 more for free delivery!"));
        assert!(!html.contains("badge--free"));
        assert!(html.contains("₹90.00"));
    }

    #[test]
    fn test_large_order_ships_free() {
        let html = render_cart_panel(&cart_with(60, 10), &DeliveryPolicy::default(), Language::En);
        assert!(html.contains("badge--free"));
        assert!(html.contains("₹0.00"));
        assert!(!html.contains("free-delivery-hint"));
        assert!(html.contains("₹600.00"));
    }

    #[test]
    fn test_exact_threshold_still_pays_fee() {
        let html = render_cart_panel(&cart_with(100, 5), &DeliveryPolicy::default(), Language::Hi);
        assert!(html.contains("₹40.00"));
        assert!(!html.contains("मुफ्त"));
        assert!(!html.contains("free-delivery-hint"));
        assert!(html.contains("कुल योग"));
    }

    #[test]
    fn test_empty_cart_panel() {
        let html = render_cart_panel(&Cart::new(), &DeliveryPolicy::default(), Language::Hi);
        assert!(html.contains("आपका कार्ट खाली है"));
    }
}
