//! Site header and tab navigation.

use vendor_commerce::catalog::Language;
use vendor_commerce::session::{Session, StoreTab};

/// Render the sticky header: logo, connectivity badge, notification
/// bell, language picker.
pub fn render_header(session: &Session) -> String {
    let (status_class, status_label) = if session.is_online {
        ("status-online", "Online")
    } else {
        ("status-offline", "Offline")
    };

    let bell = if session.has_notifications {
        r#"<button class="bell bell--active">🔔<span class="bell-dot"></span></button>"#
    } else {
        r#"<button class="bell">🔔</button>"#
    };

    let language_options: String = Language::ALL
        .iter()
        .map(|lang| {
            let selected = if *lang == session.language {
                " selected"
            } else {
                ""
            };
            format!(
                r#"<option value="{}"{}>{}</option>"#,
                lang.code(),
                selected,
                lang.native_name()
            )
        })
        .collect();

    format!(
        r#"<header class="site-header" data-section="header">
    <div class="header-left">
        <span class="logo-mark">V</span>
        <h1 class="logo-name">VendorConnect</h1>
    </div>
    <div class="header-right">
        <span class="status-badge {status_class}">{status_label}</span>
        {bell}
        <select class="language-picker" name="language">{language_options}</select>
    </div>
</header>"#
    )
}

/// Render the five-tab navigation strip.
pub fn render_tab_bar(active: StoreTab, lang: Language) -> String {
    let tabs: String = StoreTab::ALL
        .iter()
        .map(|tab| {
            let class = if *tab == active {
                "tab tab--active"
            } else {
                "tab"
            };
            format!(
                r#"<a class="{class}" href="?tab={id}">{icon} {label}</a>"#,
                id = tab.as_str(),
                icon = tab_icon(*tab),
                label = tab.label(lang)
            )
        })
        .collect();

    format!(r#"<nav class="tab-bar" data-section="tabs">{tabs}</nav>"#)
}

fn tab_icon(tab: StoreTab) -> &'static str {
    match tab {
        StoreTab::Products => "🛍️",
        StoreTab::Visual => "👁️",
        StoreTab::Voice => "🎤",
        StoreTab::Bulk => "📦",
        StoreTab::Alerts => "🔔",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_shows_connectivity_and_selected_language() {
        let mut session = Session::new();
        session.language = Language::Hi;
        let html = render_header(&session);
        assert!(html.contains("Online"));
        assert!(html.contains(r#"value="hi" selected"#));
        assert!(html.contains("bell--active"));

        session.is_online = false;
        session.has_notifications = false;
        let html = render_header(&session);
        assert!(html.contains("Offline"));
        assert!(!html.contains("bell--active"));
    }

    #[test]
    fn test_tab_bar_marks_active_tab() {
        let html = render_tab_bar(StoreTab::Bulk, Language::Hi);
        assert!(html.contains(r#"href="?tab=bulk""#));
        assert!(html.contains("थोक"));
        assert_eq!(html.matches("tab--active").count(), 1);
    }
}
