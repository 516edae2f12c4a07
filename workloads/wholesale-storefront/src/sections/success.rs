//! Post-payment confirmation overlay.

use vendor_commerce::catalog::Language;
use vendor_commerce::checkout::{
    FulfillmentMilestone, OrderConfirmation, SUPPORT_EMAIL, SUPPORT_PHONE,
};

/// Render the order confirmation shown once a payment completes.
pub fn render_success(confirmation: &OrderConfirmation, lang: Language) -> String {
    let (title, subtitle) = match lang {
        Language::Hi => ("भुगतान सफल!", "आपका ऑर्डर सफलतापूर्वक प्राप्त हुआ है"),
        _ => ("Payment Successful!", "Your order has been successfully placed"),
    };
    let labels = match lang {
        Language::Hi => [
            "ऑर्डर आईडी",
            "कुल राशि",
            "भुगतान की स्थिति",
            "अनुमानित डिलीवरी",
            "ऑर्डर किए गए आइटम",
        ],
        _ => [
            "Order ID",
            "Total Amount",
            "Payment Status",
            "Estimated Delivery",
            "Ordered Items",
        ],
    };
    let status = match lang {
        Language::Hi => "पूर्ण",
        _ => confirmation.status_label(),
    };

    let items: String = confirmation
        .items
        .iter()
        .map(|item| {
            let name = match lang {
                Language::Hi => &item.name_hi,
                _ => &item.name,
            };
            format!(
                r#"<div class="ordered-item">
        <div><h4>{name}</h4><p>{quantity} × {price} {unit}</p></div>
        <span>{line_total}</span>
    </div>"#,
                name = escape_html(name),
                quantity = item.quantity,
                price = item.unit_price.display(),
                unit = escape_html(&item.unit),
                line_total = item.line_total().display_fixed()
            )
        })
        .collect();

    let milestones: String = confirmation
        .timeline()
        .iter()
        .map(|milestone| render_milestone(milestone, lang))
        .collect();

    let help_title = match lang {
        Language::Hi => "सहायता की आवश्यकता है?",
        _ => "Need Help?",
    };

    format!(
        r#"<aside class="success-panel" data-section="success">
    <div class="success-mark">✓</div>
    <h2>{title}</h2>
    <p class="success-subtitle">{subtitle}</p>
    <div class="order-grid">
        <div class="order-fact"><span>{id_label}</span><strong class="mono">{order_number}</strong></div>
        <div class="order-fact"><span>{amount_label}</span><strong>{amount}</strong></div>
        <div class="order-fact"><span>{status_label}</span><span class="badge badge--complete">{status}</span></div>
        <div class="order-fact"><span>{delivery_label}</span><strong>{delivery}</strong></div>
    </div>
    <div class="ordered-items">
        <h3>{items_label}</h3>
        {items}
    </div>
    <div class="timeline">
        {milestones}
    </div>
    <div class="help-box">
        <h3>{help_title}</h3>
        <p>📞 {phone}</p>
        <p>✉️ {email}</p>
    </div>
</aside>"#,
        title = title,
        subtitle = subtitle,
        id_label = labels[0],
        order_number = confirmation.order_number,
        amount_label = labels[1],
        amount = confirmation.amount.display_fixed(),
        status_label = labels[2],
        status = status,
        delivery_label = labels[3],
        delivery = confirmation.estimated_delivery_label(),
        items_label = labels[4],
        items = items,
        milestones = milestones,
        help_title = help_title,
        phone = SUPPORT_PHONE,
        email = SUPPORT_EMAIL
    )
}

fn render_milestone(milestone: &FulfillmentMilestone, lang: Language) -> String {
    let icon = match milestone.label {
        "Packing" => "📦",
        "Ready" => "⏰",
        _ => "📍",
    };
    let (label, eta) = match lang {
        Language::Hi => (
            match milestone.label {
                "Packing" => "पैकिंग",
                "Ready" => "तैयार",
                _ => "डिलीवरी",
            },
            match milestone.eta {
                "Within 2-4 hours" => "2-4 घंटे में",
                "Within 4-6 hours" => "4-6 घंटे में",
                _ => "24 घंटे में",
            },
        ),
        _ => (milestone.label, milestone.eta),
    };
    format!(
        r#"<div class="milestone">
        <span class="milestone-icon">{icon}</span>
        <h4>{label}</h4>
        <p>{eta}</p>
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
    use chrono::{TimeZone, Utc};
    use vendor_commerce::checkout::OrderedItem;
    use vendor_commerce::{Money, OrderId};

    fn confirmation() -> OrderConfirmation {
        OrderConfirmation::new(
            OrderId::new("VC4X8K2M9QT"),
            Money::from_rupees(130),
            Utc.with_ymd_and_hms(2024, 3, 7, 10, 30, 0).unwrap(),
            vec![OrderedItem {
                name: "Fresh Onions".to_string(),
                name_hi: "ताज़ा प्याज".to_string(),
                quantity: 2,
                unit_price: Money::from_rupees(25),
                unit: "per kg".to_string(),
            }],
        )
    }

    #[test]
    fn test_success_shows_order_facts() {
        let html = render_success(&confirmation(), Language::En);
        assert!(html.contains("Payment Successful!"));
        assert!(html.contains("VC4X8K2M9QT"));
        assert!(html.contains("₹130.00"));
        assert!(html.contains("Completed"));
        assert!(html.contains("8/3/2024"));
        assert!(html.contains("2 × ₹25 per kg"));
        assert!(html.contains("+91 98765 43210"));
    }

    #[test]
    fn test_timeline_renders_three_milestones() {
        let html = render_success(&confirmation(), Language::En);
        assert!(html.contains("Packing"));
        assert!(html.contains("Within 4-6 hours"));
        assert_eq!(html.matches(r#"class="milestone""#).count(), 3);
    }

    #[test]
    fn test_hindi_confirmation() {
        let html = render_success(&confirmation(), Language::Hi);
        assert!(html.contains("भुगतान सफल!"));
        assert!(html.contains("पूर्ण"));
        assert!(html.contains("ताज़ा प्याज"));
        assert!(html.contains("24 घंटे में"));
    }
}
