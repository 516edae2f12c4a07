//! Payment overlay: order summary plus the three payment method forms.

use vendor_commerce::cart::{Cart, CartPricing};
use vendor_commerce::catalog::Language;
use vendor_commerce::checkout::cod_surcharge;

/// Render the payment overlay. The card tab starts selected.
pub fn render_payment_form(cart: &Cart, pricing: &CartPricing, lang: Language) -> String {
    let (title, subtitle) = match lang {
        Language::Hi => ("सुरक्षित भुगतान", "आपकी जानकारी सुरक्षित है"),
        _ => ("Secure Payment", "Your information is secure"),
    };
    let summary_title = match lang {
        Language::Hi => "ऑर्डर सारांश",
        _ => "Order Summary",
    };

    let rows: String = cart
        .lines
        .iter()
        .map(|line| {
            format!(
                r#"<div class="summary-row">
        <span class="card-emoji">{emoji}</span>
        <div class="summary-info"><h4>{name}</h4><p>{quantity} × {price}</p></div>
        <span>{line_total}</span>
    </div>"#,
                emoji = line.product.emoji,
                name = escape_html(line.product.display_name(lang)),
                quantity = line.quantity,
                price = line.product.price.display(),
                line_total = line.line_total().display_fixed()
            )
        })
        .collect();

    let labels = match lang {
        Language::Hi => ["उप-योग", "डिलीवरी शुल्क", "कुल योग", "भुगतान विधि"],
        _ => ["Subtotal", "Delivery Fee", "Total", "Payment Method"],
    };

    let pay_label = match lang {
        Language::Hi => format!("{} का भुगतान करें", pricing.total.display_fixed()),
        _ => format!("Pay {}", pricing.total.display_fixed()),
    };
    let ssl_note = match lang {
        Language::Hi => "256-बिट SSL एन्क्रिप्शन द्वारा सुरक्षित",
        _ => "Secured by 256-bit SSL encryption",
    };
    let accepted = match lang {
        Language::Hi => "स्वीकृत भुगतान विधियां:",
        _ => "Accepted payment methods:",
    };

    format!(
        r#"<aside class="payment-panel" data-section="payment">
    <div class="panel-heading">
        <div><h2>🔒 {title}</h2><p>{subtitle}</p></div>
        <button class="btn-close">✕</button>
    </div>
    <div class="payment-columns">
        <div class="order-summary">
            <h3>{summary_title}</h3>
            {rows}
            <div class="price-breakdown">
                <div class="breakdown-line"><span>{subtotal_label}</span><span>{subtotal}</span></div>
                <div class="breakdown-line"><span>{fee_label}</span><span>{fee}</span></div>
                <div class="breakdown-line breakdown-line--total"><span>{total_label}</span><span>{total}</span></div>
            </div>
        </div>
        <div class="method-picker">
            <h3>{method_label}</h3>
            <div class="method-tabs">
                <button class="method-tab method-tab--active" data-method="card">💳 {card_tab}</button>
                <button class="method-tab" data-method="upi">📱 UPI</button>
                <button class="method-tab" data-method="cod">👛 COD</button>
            </div>
            {card_form}
            {upi_form}
            {cod_note}
            <p class="ssl-note">🔒 {ssl_note}</p>
            <button class="btn-pay">🔒 {pay_label}</button>
            <p class="accepted-note">{accepted} Visa, Mastercard, RuPay, UPI, Paytm, PhonePe</p>
        </div>
    </div>
</aside>"#,
        title = title,
        subtitle = subtitle,
        summary_title = summary_title,
        rows = rows,
        subtotal_label = labels[0],
        subtotal = pricing.subtotal.display_fixed(),
        fee_label = labels[1],
        fee = pricing.delivery_fee.display_fixed(),
        total_label = labels[2],
        total = pricing.total.display_fixed(),
        method_label = labels[3],
        card_tab = match lang {
            Language::Hi => "कार्ड",
            _ => "Card",
        },
        card_form = render_card_form(lang),
        upi_form = render_upi_form(lang),
        cod_note = render_cod_note(lang),
        ssl_note = ssl_note,
        pay_label = pay_label,
        accepted = accepted
    )
}

fn render_card_form(lang: Language) -> String {
    let labels = match lang {
        Language::Hi => ["कार्ड नंबर", "समाप्ति तिथि", "कार्ड धारक का नाम", "आपका नाम"],
        _ => ["Card Number", "Expiry Date", "Cardholder Name", "Your Name"],
    };
    format!(
        r#"<div class="method-form method-form--card">
        <label>{number_label}</label>
        <input type="text" placeholder="1234 5678 9012 3456" maxlength="19">
        <div class="form-row">
            <div><label>{expiry_label}</label><input type="text" placeholder="MM/YY" maxlength="5"></div>
            <div><label>CVV</label><input type="text" placeholder="123" maxlength="4"></div>
        </div>
        <label>{holder_label}</label>
        <input type="text" placeholder="{holder_placeholder}">
    </div>"#,
        number_label = labels[0],
        expiry_label = labels[1],
        holder_label = labels[2],
        holder_placeholder = labels[3]
    )
}

fn render_upi_form(lang: Language) -> String {
    let note = match lang {
        Language::Hi => "आप अपने UPI ऐप से भुगतान की पुष्टि कर सकेंगे",
        _ => "You will be able to confirm payment from your UPI app",
    };
    format!(
        r#"<div class="method-form method-form--upi" hidden>
        <label>UPI ID</label>
        <input type="text" placeholder="yourname@paytm">
        <p class="method-note">📱 {note}</p>
    </div>"#
    )
}

fn render_cod_note(lang: Language) -> String {
    let surcharge = cod_surcharge().display();
    let (title, note) = match lang {
        Language::Hi => (
            "डिलीवरी पर भुगतान",
            format!("डिलीवरी के समय नकद भुगतान करें। {surcharge} अतिरिक्त शुल्क लागू।"),
        ),
        _ => (
            "Cash on Delivery",
            format!("Pay with cash when your order is delivered. {surcharge} additional charge applies."),
        ),
    };
    format!(
        r#"<div class="method-form method-form--cod" hidden>
        <p class="method-note">👛 <strong>{title}</strong><br>{note}</p>
    </div>"#
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
    use vendor_commerce::cart::DeliveryPolicy;
    use vendor_commerce::catalog::{LocalizedName, Product, ProductCategory};
    use vendor_commerce::Money;

    fn checkout_cart() -> Cart {
        let product = Product::new(
            "2",
            LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
            Money::from_rupees(40),
            Money::from_rupees(35),
            "per kg",
            4.2,
            ProductCategory::Vegetables,
            "🍅",
        );
        let mut cart = Cart::new();
        cart.add_qty(&product, 3).unwrap();
        cart
    }

    #[test]
    fn test_pay_button_shows_grand_total() {
        let cart = checkout_cart();
        let pricing = cart.pricing(&DeliveryPolicy::default());
        let html = render_payment_form(&cart, &pricing, Language::En);
        assert!(html.contains("Pay ₹160.00"));
        assert!(html.contains("3 × ₹40"));
        assert!(html.contains("Secured by 256-bit SSL encryption"));
    }

    #[test]
    fn test_cod_note_carries_surcharge() {
        let cart = checkout_cart();
        let pricing = cart.pricing(&DeliveryPolicy::default());
        let html = render_payment_form(&cart, &pricing, Language::En);
        assert!(html.contains("₹20 additional charge applies"));
    }

    #[test]
    fn test_hindi_pay_button() {
        let cart = checkout_cart();
        let pricing = cart.pricing(&DeliveryPolicy::default());
        let html = render_payment_form(&cart, &pricing, Language::Hi);
        assert!(html.contains("₹160.00 का भुगतान करें"));
    }
}
