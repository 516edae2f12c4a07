//! Wholesale grocery storefront - Reference workload.
//!
//! Renders the VendorConnect mockup as a single server-side page:
//! - Five tabs: product grid, visual shopping, voice ordering, bulk
//!   ordering with group pooling, price alerts
//! - English/Hindi copy throughout, Tamil on the visual tab
//! - Cart, payment, and confirmation overlays driven by session state

mod data;
mod page;
mod sections;

use std::collections::HashMap;

use chrono::{DateTime, Utc};

use vendor_commerce::cart::DeliveryPolicy;
use vendor_commerce::catalog::{BulkCategory, Language};
use vendor_commerce::session::{Overlay, Session, StoreTab, VoiceSession};

pub use data::*;
pub use page::{HeadContent, PageShell};
pub use sections::*;

/// Render the whole storefront page for one session.
///
/// `now` anchors the pool countdowns so renders are reproducible.
pub fn render_page(
    data: &StorefrontData,
    session: &Session,
    policy: &DeliveryPolicy,
    now: DateTime<Utc>,
) -> String {
    let lang = session.language;

    let (welcome, tagline) = match lang {
        Language::Hi => (
            "स्वागत है VendorConnect में",
            "ताज़ा और गुणवत्तापूर्ण उत्पाद, आपकी भाषा में",
        ),
        _ => (
            "Welcome to VendorConnect",
            "Fresh & quality products, in your language",
        ),
    };

    let tab_content = match session.active_tab {
        StoreTab::Products => render_product_grid(&data.products, lang),
        StoreTab::Visual => render_visual_grid(&data.products, lang),
        StoreTab::Voice => render_voice_panel(&VoiceSession::new(), lang),
        StoreTab::Bulk => render_bulk_tab(data, now),
        StoreTab::Alerts => render_alert_center(&data.alerts, lang),
    };

    let overlay = match &session.overlay {
        Overlay::None => String::new(),
        Overlay::Cart => render_cart_panel(&session.cart, policy, lang),
        Overlay::Payment => {
            render_payment_form(&session.cart, &session.cart.pricing(policy), lang)
        }
        Overlay::Success(confirmation) => render_success(confirmation, lang),
    };

    let shell = PageShell::new(
        lang,
        HeadContent::new("VendorConnect")
            .with_meta("viewport", "width=device-width, initial-scale=1")
            .with_style(STOREFRONT_STYLES),
    )
    .with_body_start(format!(
        r#"<body>
{header}
<main class="store-main">
    <div class="welcome">
        <h1>{welcome}</h1>
        <p>{tagline}</p>
    </div>
{tab_bar}
"#,
        header = render_header(session),
        welcome = welcome,
        tagline = tagline,
        tab_bar = render_tab_bar(session.active_tab, lang)
    ))
    .with_body_end(format!(
        r#"
</main>
{cart_button}
{overlay}
</body>
</html>"#,
        cart_button = render_cart_button(&session.cart),
        overlay = overlay
    ));

    let mut html = shell.render_opening();
    html.push_str(&tab_content);
    html.push_str(&shell.render_closing());
    html
}

/// The bulk tab nests its own two-pane toggle: individual bulk orders
/// on top, the group pooling board below it. Both panes keep English
/// copy regardless of the session language.
fn render_bulk_tab(data: &StorefrontData, now: DateTime<Utc>) -> String {
    let quantities: HashMap<_, _> = HashMap::new();
    format!(
        r#"<div class="bulk-tab">
    <nav class="inner-tabs">
        <button class="inner-tab inner-tab--active">🛒 Individual Bulk Orders</button>
        <button class="inner-tab">👥 Group Pooling</button>
    </nav>
{board}
{pools}
</div>"#,
        board = render_bulk_board(&data.bulk_products, BulkCategory::All, &quantities),
        pools = render_pool_board(&data.pools, now, Language::En)
    )
}

/// Page styles, grouped per section.
const STOREFRONT_STYLES: &str = r#"
* { box-sizing: border-box; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; margin: 0; background: #f7f7f5; color: #1a1a1a; }
.store-main { max-width: 1100px; margin: 0 auto; padding: 2rem 1rem 6rem; }
.welcome h1 { font-size: 1.9rem; margin: 0 0 0.25rem; }
.welcome p { color: #666; margin: 0 0 1.5rem; }
.mono { font-family: ui-monospace, monospace; }
.badge { display: inline-block; font-size: 0.75rem; padding: 0.2rem 0.5rem; border-radius: 999px; background: #eee; }
.badge--active, .badge--complete, .badge--free { background: #e8f5e9; color: #2e7d32; }
.badge--inactive { background: #f5f5f5; color: #888; }
.badge--trigger { background: #fff3e0; color: #e65100; }

/* Header */
.site-header { display: flex; justify-content: space-between; align-items: center; background: white; padding: 0.75rem 1.5rem; border-bottom: 1px solid #e5e5e5; position: sticky; top: 0; }
.header-left { display: flex; align-items: center; gap: 0.5rem; }
.logo-mark { background: #16a34a; color: white; width: 2rem; height: 2rem; border-radius: 8px; display: grid; place-items: center; font-weight: bold; }
.logo-name { font-size: 1.2rem; margin: 0; }
.header-right { display: flex; align-items: center; gap: 0.75rem; }
.status-badge { font-size: 0.75rem; padding: 0.2rem 0.6rem; border-radius: 999px; }
.status-online { background: #e8f5e9; color: #2e7d32; }
.status-offline { background: #ffebee; color: #c62828; }
.bell { position: relative; background: none; border: none; font-size: 1.1rem; cursor: pointer; }
.bell-dot { position: absolute; top: 0; right: 0; width: 8px; height: 8px; background: #e53935; border-radius: 50%; }
.language-picker { padding: 0.3rem 0.5rem; border: 1px solid #ddd; border-radius: 6px; }

/* Tabs */
.tab-bar { display: flex; gap: 0.25rem; background: #ececec; border-radius: 10px; padding: 0.25rem; margin-bottom: 1.5rem; }
.tab { flex: 1; text-align: center; padding: 0.5rem; border-radius: 8px; text-decoration: none; color: #444; font-size: 0.9rem; }
.tab--active { background: white; color: #111; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }
.inner-tabs { display: grid; grid-template-columns: 1fr 1fr; gap: 0.25rem; background: #ececec; border-radius: 10px; padding: 0.25rem; margin-bottom: 1rem; }
.inner-tab { border: none; background: none; padding: 0.5rem; border-radius: 8px; cursor: pointer; }
.inner-tab--active { background: white; box-shadow: 0 1px 2px rgba(0,0,0,0.08); }

/* Product grid */
.grid-heading h2 { margin: 0; }
.grid-heading p { color: #666; margin: 0.25rem 0 1rem; }
.card-grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(220px, 1fr)); gap: 1rem; }
.card-grid--compact { grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); }
.product-card, .visual-card { background: white; border: 1px solid #e5e5e5; border-radius: 12px; overflow: hidden; display: flex; flex-direction: column; }
.card-media { position: relative; display: grid; place-items: center; background: #fafaf8; padding: 1.5rem 0; }
.card-emoji { font-size: 2.5rem; }
.card-emoji--large { font-size: 3.5rem; }
.stock-overlay { position: absolute; inset: 0; display: grid; place-items: center; background: rgba(255,255,255,0.85); font-weight: 600; color: #c62828; }
.trend-badge { position: absolute; top: 0.5rem; right: 0.5rem; font-size: 0.72rem; padding: 0.15rem 0.4rem; border-radius: 6px; }
.trend-up { background: #ffebee; color: #c62828; }
.trend-down { background: #e8f5e9; color: #2e7d32; }
.card-body { padding: 0.75rem 1rem; flex: 1; }
.card-title-row { display: flex; justify-content: space-between; align-items: baseline; gap: 0.5rem; }
.name-hindi { color: #888; font-size: 0.85rem; }
.rating { color: #f59e0b; font-size: 0.85rem; }
.card-category { color: #999; font-size: 0.78rem; }
.price-row { display: flex; align-items: baseline; gap: 0.4rem; margin-top: 0.4rem; }
.price-current { font-size: 1.25rem; font-weight: 700; color: #16a34a; }
.price-previous { text-decoration: line-through; color: #999; font-size: 0.85rem; }
.price-unit { color: #888; font-size: 0.8rem; }
.card-footer { padding: 0 1rem 1rem; }
.btn-add { width: 100%; border: none; background: #16a34a; color: white; padding: 0.55rem; border-radius: 8px; cursor: pointer; }
.btn-add:disabled { background: #ccc; cursor: not-allowed; }
.btn-add--small { padding: 0.4rem; font-size: 0.85rem; }

/* Visual shopping */
.visual-heading h2 { margin: 0; }
.visual-heading p { color: #666; margin: 0.25rem 0 1rem; }
.visual-group { margin-bottom: 1.5rem; }
.group-heading { display: flex; align-items: center; gap: 0.5rem; margin-bottom: 0.75rem; }
.group-emoji { font-size: 1.4rem; }
.group-count { color: #888; font-size: 0.85rem; }
.btn-speak { position: absolute; top: 0.5rem; left: 0.5rem; border: none; background: white; border-radius: 50%; width: 2rem; height: 2rem; cursor: pointer; box-shadow: 0 1px 3px rgba(0,0,0,0.15); }

/* Voice ordering */
.voice-panel { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 2rem; text-align: center; }
.voice-heading { display: flex; justify-content: center; align-items: center; gap: 0.75rem; }
.voice-language-badge { background: #ede9fe; color: #6d28d9; font-size: 0.78rem; padding: 0.2rem 0.6rem; border-radius: 999px; }
.mic-stage { margin: 1.5rem 0; }
.mic { font-size: 2.6rem; background: #f3f4f6; border: none; width: 5rem; height: 5rem; border-radius: 50%; cursor: pointer; }
.mic--listening { background: #fee2e2; animation: pulse 1s infinite; }
@keyframes pulse { 50% { transform: scale(1.08); } }
.mic-prompt { font-weight: 600; margin: 0.75rem 0 0.25rem; }
.mic-hint { color: #888; font-size: 0.85rem; }
.voice-progress { max-width: 320px; margin: 0.75rem auto; }
.voice-order { text-align: left; background: #fafaf8; border-radius: 10px; padding: 1rem; margin-top: 1.5rem; }
.voice-order-heading { display: flex; justify-content: space-between; align-items: center; }
.voice-transcript, .voice-translation { margin: 0.5rem 0; }
.transcript-text { font-size: 1.05rem; }
.voice-actions { display: flex; gap: 0.5rem; margin-top: 0.75rem; }
.btn-play, .btn-again { border: 1px solid #ddd; background: white; padding: 0.45rem 0.9rem; border-radius: 8px; cursor: pointer; }
.feature-trio { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; margin-top: 1.5rem; }
.feature-card { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 1.25rem; text-align: center; }
.feature-icon { font-size: 1.8rem; }

/* Bulk ordering */
.bulk-heading h2 { margin: 0; }
.bulk-heading p { color: #666; margin: 0.25rem 0 1rem; }
.chip-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 1rem; }
.chip { border: 1px solid #ddd; background: white; padding: 0.35rem 0.8rem; border-radius: 999px; text-decoration: none; color: #444; font-size: 0.85rem; }
.chip--active { background: #16a34a; border-color: #16a34a; color: white; }
.savings-strip { display: flex; justify-content: space-between; align-items: center; background: #f0fdf4; border: 1px solid #bbf7d0; border-radius: 10px; padding: 0.75rem 1rem; margin-bottom: 1rem; color: #166534; }
.bulk-card { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 1rem; }
.bulk-card--unlocked { border-color: #bbf7d0; }
.min-badge { font-size: 0.75rem; background: #fef3c7; color: #92400e; padding: 0.15rem 0.5rem; border-radius: 6px; }
.price-line { display: flex; justify-content: space-between; font-size: 0.9rem; margin: 0.25rem 0; }
.price-line--bulk { color: #16a34a; font-weight: 600; }
.price-line--struck { text-decoration: line-through; color: #999; }
.quantity-row { display: flex; justify-content: space-between; align-items: center; margin: 0.6rem 0; }
.stepper { display: inline-flex; align-items: center; gap: 0.5rem; }
.btn-step { width: 1.8rem; height: 1.8rem; border: 1px solid #ddd; background: white; border-radius: 6px; cursor: pointer; }
.stepper-value { min-width: 2.5rem; text-align: center; }
.shortfall-hint { font-size: 0.78rem; background: #fff7ed; color: #c2410c; padding: 0.4rem 0.6rem; border-radius: 6px; margin: 0.5rem 0; }
.card-totals { border-top: 1px dashed #e5e5e5; margin-top: 0.5rem; padding-top: 0.5rem; }
.total-line { display: flex; justify-content: space-between; font-size: 0.9rem; }
.total-line--save { color: #16a34a; }
.bulk-benefits { background: #eff6ff; border: 1px solid #bfdbfe; border-radius: 12px; padding: 1rem 1.25rem; margin-top: 1.5rem; color: #1d4ed8; }
.bulk-benefits ul { list-style: none; margin: 0.5rem 0 0; padding: 0; }
.bulk-benefits li { margin: 0.3rem 0; font-size: 0.9rem; }

/* Group pooling */
.pool-heading h2 { margin: 0; }
.pool-heading p { color: #666; margin: 0.25rem 0 1rem; }
.pool-stats { display: grid; grid-template-columns: repeat(4, 1fr); gap: 0.75rem; margin-bottom: 1rem; }
.stat { background: white; border: 1px solid #e5e5e5; border-radius: 10px; padding: 0.75rem; text-align: center; }
.stat-value { font-size: 1.25rem; font-weight: 700; display: block; }
.pool-card { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 1rem; margin-bottom: 1rem; }
.pool-card-heading { display: flex; justify-content: space-between; align-items: center; gap: 0.5rem; }
.pool-badge--joined { background: #e8f5e9; color: #2e7d32; }
.pool-badge--complete { background: #ede9fe; color: #6d28d9; }
.pool-meta { color: #888; font-size: 0.85rem; margin: 0.35rem 0; }
.pool-prices { display: flex; align-items: baseline; gap: 0.5rem; }
.price-target { font-size: 1.2rem; font-weight: 700; color: #16a34a; }
.pool-progress { margin: 0.6rem 0; }
.progress-labels { display: flex; justify-content: space-between; font-size: 0.85rem; margin-bottom: 0.25rem; }
.progress-labels--small { font-size: 0.78rem; color: #888; }
.progress-track { height: 8px; background: #eee; border-radius: 4px; overflow: hidden; }
.progress-fill { height: 100%; background: #16a34a; }
.savings-breakdown { background: #fafaf8; border-radius: 8px; padding: 0.6rem 0.8rem; font-size: 0.85rem; margin: 0.5rem 0; }
.pool-contribution { font-size: 0.9rem; margin: 0.4rem 0; }
.pool-actions { margin-top: 0.6rem; }
.btn-join { width: 100%; border: none; background: #16a34a; color: white; padding: 0.55rem; border-radius: 8px; cursor: pointer; }
.btn-join:disabled { background: #ccc; cursor: not-allowed; }
.btn-leave { width: 100%; border: 1px solid #fca5a5; background: white; color: #b91c1c; padding: 0.55rem; border-radius: 8px; cursor: pointer; }
.how-it-works { margin-top: 1.5rem; }
.step-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1rem; }
.step-card { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 1.25rem; }

/* Price alerts */
.alert-heading h2 { margin: 0; }
.alert-heading p { color: #666; margin: 0.25rem 0 1rem; }
.alert-stats { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin-bottom: 1rem; }
.notification-settings, .alert-list, .alert-form, .sample-messages { background: white; border: 1px solid #e5e5e5; border-radius: 12px; padding: 1rem 1.25rem; margin-bottom: 1rem; }
.phone-row { display: flex; gap: 0.5rem; margin: 0.5rem 0; }
.phone-row input { flex: 1; padding: 0.45rem 0.6rem; border: 1px solid #ddd; border-radius: 8px; }
.btn-test-alert, .btn-add-alert, .btn-create-alert { border: none; background: #16a34a; color: white; padding: 0.45rem 0.9rem; border-radius: 8px; cursor: pointer; }
.settings-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.4rem; font-size: 0.9rem; }
.alert-list-heading { display: flex; justify-content: space-between; align-items: center; margin-bottom: 0.5rem; }
.alert-row { display: flex; justify-content: space-between; align-items: center; border-top: 1px solid #f0f0f0; padding: 0.6rem 0; }
.alert-row-main { display: flex; flex-direction: column; gap: 0.25rem; }
.alert-row-actions { display: flex; gap: 0.4rem; }
.btn-toggle, .btn-remove { border: 1px solid #ddd; background: white; padding: 0.3rem 0.7rem; border-radius: 6px; cursor: pointer; }
.alert-form label { display: block; font-size: 0.85rem; margin: 0.5rem 0 0.2rem; }
.alert-form input[type="text"], .alert-form input[type="number"] { width: 100%; padding: 0.45rem 0.6rem; border: 1px solid #ddd; border-radius: 8px; }
.radio-row { display: flex; gap: 1rem; font-size: 0.9rem; }
.sample { border-radius: 8px; padding: 0.75rem; font-size: 0.85rem; margin: 0.5rem 0; }
.sample--daily { background: #f0fdf4; }
.sample--alert { background: #fff7ed; }

/* Cart */
.cart-fab { position: fixed; bottom: 1.5rem; right: 1.5rem; width: 3.5rem; height: 3.5rem; border-radius: 50%; border: none; background: #16a34a; color: white; font-size: 1.3rem; cursor: pointer; box-shadow: 0 4px 10px rgba(0,0,0,0.2); }
.cart-fab-badge { position: absolute; top: -0.3rem; right: -0.3rem; background: #e53935; color: white; font-size: 0.7rem; width: 1.25rem; height: 1.25rem; border-radius: 50%; display: grid; place-items: center; }
.cart-panel, .payment-panel, .success-panel { position: fixed; inset: 0; margin: auto; max-width: 560px; max-height: 85vh; overflow-y: auto; background: white; border-radius: 16px; padding: 1.5rem; box-shadow: 0 10px 40px rgba(0,0,0,0.25); }
.panel-heading { display: flex; justify-content: space-between; align-items: start; }
.btn-close { border: none; background: none; font-size: 1.1rem; cursor: pointer; }
.cart-empty { text-align: center; color: #888; padding: 2rem 0; }
.cart-rows { margin: 1rem 0; }
.cart-row { display: flex; align-items: center; gap: 0.75rem; border-top: 1px solid #f0f0f0; padding: 0.6rem 0; }
.cart-row-info { flex: 1; }
.cart-row-total { font-weight: 600; }
.breakdown-grid { border-top: 1px solid #eee; padding-top: 0.75rem; }
.breakdown-line { display: flex; justify-content: space-between; margin: 0.3rem 0; }
.breakdown-line--total { font-weight: 700; font-size: 1.05rem; border-top: 1px solid #eee; padding-top: 0.5rem; }
.free-delivery-hint { background: #fff7ed; color: #c2410c; border-radius: 8px; padding: 0.5rem 0.75rem; font-size: 0.85rem; margin: 0.6rem 0; }
.btn-checkout { width: 100%; border: none; background: #16a34a; color: white; padding: 0.7rem; border-radius: 10px; font-size: 1rem; cursor: pointer; margin-top: 0.5rem; }
.trust-row { display: flex; justify-content: center; gap: 1.5rem; color: #888; font-size: 0.8rem; margin-top: 0.75rem; }

/* Payment */
.payment-panel { max-width: 760px; }
.payment-columns { display: grid; grid-template-columns: 1fr 1fr; gap: 1.5rem; }
.order-summary, .method-picker { min-width: 0; }
.summary-row { display: flex; align-items: center; gap: 0.6rem; border-top: 1px solid #f0f0f0; padding: 0.5rem 0; }
.summary-info { flex: 1; }
.summary-info h4, .summary-info p { margin: 0; }
.summary-info p { color: #888; font-size: 0.8rem; }
.method-tabs { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.4rem; margin-bottom: 0.75rem; }
.method-tab { border: 1px solid #ddd; background: white; padding: 0.5rem; border-radius: 8px; cursor: pointer; }
.method-tab--active { border-color: #16a34a; background: #f0fdf4; }
.method-form label { display: block; font-size: 0.85rem; margin: 0.5rem 0 0.2rem; }
.method-form input { width: 100%; padding: 0.45rem 0.6rem; border: 1px solid #ddd; border-radius: 8px; }
.form-row { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; }
.method-note { background: #fafaf8; border-radius: 8px; padding: 0.6rem 0.8rem; font-size: 0.85rem; }
.ssl-note { color: #888; font-size: 0.8rem; text-align: center; }
.btn-pay { width: 100%; border: none; background: #16a34a; color: white; padding: 0.7rem; border-radius: 10px; font-size: 1rem; cursor: pointer; }
.accepted-note { color: #888; font-size: 0.78rem; text-align: center; margin-top: 0.5rem; }

/* Success */
.success-panel { text-align: center; }
.success-mark { width: 3.5rem; height: 3.5rem; margin: 0 auto 0.75rem; border-radius: 50%; background: #e8f5e9; color: #2e7d32; font-size: 1.8rem; display: grid; place-items: center; }
.success-subtitle { color: #666; }
.order-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 0.75rem; text-align: left; margin: 1rem 0; }
.order-fact { background: #fafaf8; border-radius: 8px; padding: 0.6rem 0.8rem; display: flex; flex-direction: column; gap: 0.2rem; }
.order-fact span:first-child { color: #888; font-size: 0.78rem; }
.ordered-items { text-align: left; margin: 1rem 0; }
.ordered-item { display: flex; justify-content: space-between; align-items: center; border-top: 1px solid #f0f0f0; padding: 0.5rem 0; }
.ordered-item h4, .ordered-item p { margin: 0; }
.ordered-item p { color: #888; font-size: 0.8rem; }
.timeline { display: grid; grid-template-columns: repeat(3, 1fr); gap: 0.75rem; margin: 1rem 0; }
.milestone { background: #fafaf8; border-radius: 10px; padding: 0.75rem; }
.milestone-icon { font-size: 1.4rem; }
.milestone h4 { margin: 0.3rem 0 0.1rem; }
.milestone p { margin: 0; color: #888; font-size: 0.8rem; }
.help-box { background: #eff6ff; border-radius: 10px; padding: 0.75rem 1rem; text-align: left; }
.help-box h3 { margin: 0 0 0.4rem; }
.help-box p { margin: 0.2rem 0; }
"#;
