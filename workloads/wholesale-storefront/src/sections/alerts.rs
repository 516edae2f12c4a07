//! Price alert center.

use vendor_commerce::alerts::{AlertCenter, AlertChannel, AlertDirection, PriceAlert};
use vendor_commerce::catalog::Language;

/// Render the Alerts tab: stats, notification settings, the alert list,
/// the add-alert form, and sample messages.
pub fn render_alert_center(center: &AlertCenter, lang: Language) -> String {
    let (title, subtitle) = match lang {
        Language::Hi => ("प्राइस अलर्ट", "दैनिक मूल्य अपडेट WhatsApp या SMS पर पाएं"),
        _ => ("Price Alerts", "Get daily price updates via WhatsApp or SMS"),
    };
    let stat_labels = match lang {
        Language::Hi => ["सक्रिय अलर्ट", "आज की बचत", "मिले अलर्ट"],
        _ => ["Active Alerts", "Today's Savings", "Alerts Received"],
    };

    let rows: String = center
        .alerts
        .iter()
        .map(|alert| render_alert_row(alert, lang))
        .collect();
    let list_title = match lang {
        Language::Hi => "आपके अलर्ट",
        _ => "Your Alerts",
    };
    let add_label = match lang {
        Language::Hi => "नया अलर्ट",
        _ => "Add Alert",
    };

    format!(
        r#"<section class="alert-center" data-section="alerts">
    <div class="alert-heading">
        <h2>🔔 {title}</h2>
        <p>{subtitle}</p>
        <div class="alert-stats">
            <div class="stat"><span class="stat-value">{active}</span><span>{l0}</span></div>
            <div class="stat"><span class="stat-value">₹18</span><span>{l1}</span></div>
            <div class="stat"><span class="stat-value">3</span><span>{l2}</span></div>
        </div>
    </div>
    {settings}
    <div class="alert-list">
        <div class="alert-list-heading"><h3>{list_title}</h3><button class="btn-add-alert">+ {add_label}</button></div>
        {rows}
    </div>
    {form}
    {samples}
</section>"#,
        title = title,
        subtitle = subtitle,
        active = center.active_count(),
        l0 = stat_labels[0],
        l1 = stat_labels[1],
        l2 = stat_labels[2],
        settings = render_notification_settings(center, lang),
        list_title = list_title,
        add_label = add_label,
        rows = rows,
        form = render_alert_form(lang),
        samples = render_sample_messages(lang)
    )
}

/// Render one alert row with its status, trigger, and channel.
pub fn render_alert_row(alert: &PriceAlert, lang: Language) -> String {
    let status = if alert.is_active {
        match lang {
            Language::Hi => r#"<span class="badge badge--active">सक्रिय</span>"#,
            _ => r#"<span class="badge badge--active">Active</span>"#,
        }
    } else {
        match lang {
            Language::Hi => r#"<span class="badge badge--inactive">निष्क्रिय</span>"#,
            _ => r#"<span class="badge badge--inactive">Inactive</span>"#,
        }
    };

    let direction = match (alert.direction, lang) {
        (AlertDirection::Below, Language::Hi) => "↓ नीचे",
        (AlertDirection::Below, _) => "↓ Below",
        (AlertDirection::Above, Language::Hi) => "↑ ऊपर",
        (AlertDirection::Above, _) => "↑ Above",
    };

    let (current_label, notify_label) = match lang {
        Language::Hi => ("वर्तमान मूल्य:", "सूचना:"),
        _ => ("Current Price:", "Notify via:"),
    };
    let toggle_label = if alert.is_active {
        match lang {
            Language::Hi => "रोकें",
            _ => "Pause",
        }
    } else {
        match lang {
            Language::Hi => "शुरू करें",
            _ => "Start",
        }
    };

    format!(
        r#"<div class="alert-row" data-alert-id="{id}">
    <div class="alert-row-main">
        <h4>{name} {status} <span class="badge badge--trigger">{direction} {target}</span></h4>
        <p>{current_label} {current} | {notify_label} {channel}</p>
    </div>
    <div class="alert-row-actions">
        <button class="btn-toggle">{toggle_label}</button>
        <button class="btn-remove">✕</button>
    </div>
</div>"#,
        id = alert.id,
        name = escape_html(alert.display_name(lang)),
        status = status,
        direction = direction,
        target = alert.target_price.display(),
        current_label = current_label,
        current = alert.current_price.display(),
        notify_label = notify_label,
        channel = alert.channel.label(),
        toggle_label = toggle_label
    )
}

fn render_notification_settings(center: &AlertCenter, lang: Language) -> String {
    let labels = match lang {
        Language::Hi => [
            "सूचना सेटिंग्स",
            "WhatsApp नंबर",
            "टेस्ट अलर्ट भेजें",
            "दैनिक मूल्य अपडेट",
            "मूल्य गिरावट",
            "नए ऑफर",
            "साप्ताहिक रिपोर्ट",
        ],
        _ => [
            "Notification Settings",
            "WhatsApp Number",
            "Send Test Alert",
            "Daily Price Updates",
            "Price Drops",
            "New Deals",
            "Weekly Report",
        ],
    };
    let settings = &center.settings;
    let checkbox = |checked: bool, label: &str| {
        let mark = if checked { " checked" } else { "" };
        format!(r#"<label><input type="checkbox"{mark}> {label}</label>"#)
    };

    format!(
        r#"<div class="notification-settings">
    <h3>📱 {title}</h3>
    <div class="phone-row">
        <label>{phone_label}</label>
        <input type="tel" value="{phone}">
        <button class="btn-test-alert">{test_label}</button>
    </div>
    <div class="settings-grid">
        {daily}
        {drops}
        {deals}
        {weekly}
    </div>
</div>"#,
        title = labels[0],
        phone_label = labels[1],
        phone = escape_html(&settings.phone),
        test_label = labels[2],
        daily = checkbox(settings.daily_updates, labels[3]),
        drops = checkbox(settings.price_drops, labels[4]),
        deals = checkbox(settings.new_deals, labels[5]),
        weekly = checkbox(settings.weekly_report, labels[6])
    )
}

fn render_alert_form(lang: Language) -> String {
    let labels = match lang {
        Language::Hi => [
            "नया प्राइस अलर्ट",
            "उत्पाद का नाम",
            "जैसे: प्याज, टमाटर",
            "लक्ष्य मूल्य (₹)",
            "अलर्ट का प्रकार",
            "नीचे जाने पर",
            "ऊपर जाने पर",
            "सूचना का तरीका",
            "दोनों",
            "अलर्ट बनाएं",
        ],
        _ => [
            "New Price Alert",
            "Product Name",
            "e.g., Onions, Tomatoes",
            "Target Price (₹)",
            "Alert Type",
            "Price Drops",
            "Price Rises",
            "Notification Method",
            "Both",
            "Create Alert",
        ],
    };

    format!(
        r#"<div class="alert-form">
    <h3>{title}</h3>
    <label>{name_label}</label>
    <input type="text" placeholder="{name_placeholder}">
    <label>{price_label}</label>
    <input type="number" min="1">
    <label>{type_label}</label>
    <div class="radio-row">
        <label><input type="radio" name="direction" value="{below}" checked> {drops}</label>
        <label><input type="radio" name="direction" value="{above}"> {rises}</label>
    </div>
    <label>{method_label}</label>
    <div class="radio-row">
        <label><input type="radio" name="channel" value="whatsapp" checked> WhatsApp</label>
        <label><input type="radio" name="channel" value="sms"> SMS</label>
        <label><input type="radio" name="channel" value="both"> {both}</label>
    </div>
    <button class="btn-create-alert">{create}</button>
</div>"#,
        title = labels[0],
        name_label = labels[1],
        name_placeholder = labels[2],
        price_label = labels[3],
        type_label = labels[4],
        below = AlertDirection::Below.as_str(),
        drops = labels[5],
        above = AlertDirection::Above.as_str(),
        rises = labels[6],
        method_label = labels[7],
        both = labels[8],
        create = labels[9]
    )
}

fn render_sample_messages(lang: Language) -> String {
    let (title, daily_label, daily, alert_label, alert) = match lang {
        Language::Hi => (
            "नमूना संदेश",
            "दैनिक मूल्य अपडेट:",
            "🌅 शुभ प्रभात! आज के भाव:<br>🧅 प्याज: ₹22 (-₹3)<br>🍅 टमाटर: ₹38 (+₹2)<br>🥔 आलू: ₹18 (-₹2)<br><br>💰 आज बचत के अवसर देखें!",
            "प्राइस अलर्ट:",
            "🚨 अलर्ट: प्याज का भाव ₹20 तक गिर गया है!<br><br>अभी ऑर्डर करें और बचत करें। VendorConnect पर देखें।",
        ),
        _ => (
            "Sample Messages",
            "Daily Price Update:",
            "🌅 Good Morning! Today's Prices:<br>🧅 Onions: ₹22 (-₹3)<br>🍅 Tomatoes: ₹38 (+₹2)<br>🥔 Potatoes: ₹18 (-₹2)<br><br>💰 See today's savings opportunities!",
            "Price Alert:",
            "🚨 Alert: Onion prices have dropped to ₹20!<br><br>Order now and save money. Check VendorConnect app.",
        ),
    };

    format!(
        r#"<div class="sample-messages">
    <h3>💬 {title}</h3>
    <div class="sample sample--daily"><p>{daily_label}</p><p>{daily}</p></div>
    <div class="sample sample--alert"><p>{alert_label}</p><p>{alert}</p></div>
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
    use vendor_commerce::{AlertId, Money};

    fn tomato_alert() -> PriceAlert {
        PriceAlert {
            id: AlertId::from("2"),
            product_name: "Tomatoes".to_string(),
            product_name_hi: "टमाटर".to_string(),
            current_price: Money::from_rupees(40),
            target_price: Money::from_rupees(50),
            direction: AlertDirection::Above,
            channel: AlertChannel::Both,
            is_active: true,
        }
    }

    #[test]
    fn test_row_shows_trigger_and_combined_channel() {
        let html = render_alert_row(&tomato_alert(), Language::En);
        assert!(html.contains("↑ Above ₹50"));
        assert!(html.contains("WhatsApp + SMS"));
        assert!(html.contains("Pause"));
    }

    #[test]
    fn test_paused_row_offers_start() {
        let mut alert = tomato_alert();
        alert.is_active = false;
        let html = render_alert_row(&alert, Language::Hi);
        assert!(html.contains("निष्क्रिय"));
        assert!(html.contains("शुरू करें"));
    }

    #[test]
    fn test_center_counts_active_alerts() {
        let mut paused = tomato_alert();
        paused.id = AlertId::from("3");
        paused.is_active = false;
        let center = AlertCenter::new(vec![tomato_alert(), paused]);

        let html = render_alert_center(&center, Language::En);
        assert!(html.contains(r#"<span class="stat-value">1</span>"#));
        assert!(html.contains("₹18"));
        assert!(html.contains("Good Morning! Today's Prices"));
    }
}
