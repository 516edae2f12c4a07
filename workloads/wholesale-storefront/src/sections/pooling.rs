//! Group-buying pool board.

use chrono::{DateTime, Utc};
use vendor_commerce::catalog::Language;
use vendor_commerce::pooling::{BulkPool, PoolBoard};

/// Render the pooling view: header stats, one card per pool, and the
/// how-it-works explainer.
pub fn render_pool_board(pools: &[BulkPool], now: DateTime<Utc>, lang: Language) -> String {
    if pools.is_empty() {
        return render_pool_board_fallback(lang);
    }

    let board = PoolBoard::from_pools(pools);

    let (title, subtitle) = match lang {
        Language::Hi => ("ग्रुप खरीदारी", "अन्य विक्रेताओं के साथ मिलकर बेहतर दाम पाएं"),
        _ => ("Group Buying", "Join with other vendors for better prices"),
    };
    let stat_labels = match lang {
        Language::Hi => ["शामिल ग्रुप", "संभावित बचत", "उपलब्ध ग्रुप", "औसत दूरी"],
        _ => [
            "Joined Groups",
            "Potential Savings",
            "Available Groups",
            "Avg Distance",
        ],
    };

    let cards: String = pools.iter().map(|p| render_pool_card(p, now, lang)).collect();

    format!(
        r#"<section class="pool-board" data-section="pools">
    <div class="pool-heading">
        <h2>👥 {title}</h2>
        <p>{subtitle}</p>
        <div class="pool-stats">
            <div class="stat"><span class="stat-value">{joined}</span><span>{l0}</span></div>
            <div class="stat"><span class="stat-value">{savings}</span><span>{l1}</span></div>
            <div class="stat"><span class="stat-value">{available}</span><span>{l2}</span></div>
            <div class="stat"><span class="stat-value">2.5km</span><span>{l3}</span></div>
        </div>
    </div>
    {cards}
    {how_it_works}
</section>"#,
        title = title,
        subtitle = subtitle,
        joined = board.joined_count,
        savings = board.potential_savings.display(),
        available = board.available_count,
        l0 = stat_labels[0],
        l1 = stat_labels[1],
        l2 = stat_labels[2],
        l3 = stat_labels[3],
        cards = cards,
        how_it_works = render_how_it_works(lang)
    )
}

/// Render the board placeholder when no pools are open.
pub fn render_pool_board_fallback(lang: Language) -> String {
    let message = match lang {
        Language::Hi => "अभी कोई ग्रुप खुला नहीं है",
        _ => "No pools open nearby right now.",
    };
    format!(
        r#"<section class="pool-board pool-board--empty" data-section="pools">
    <p>{message}</p>
</section>"#
    )
}

/// Render one pool card with progress, savings breakdown, and actions.
pub fn render_pool_card(pool: &BulkPool, now: DateTime<Utc>, lang: Language) -> String {
    let name = match lang {
        Language::Hi => &pool.name_hi,
        _ => &pool.name,
    };

    let joined_badge = if pool.is_joined {
        match lang {
            Language::Hi => r#"<span class="pool-badge pool-badge--joined">✓ शामिल</span>"#,
            _ => r#"<span class="pool-badge pool-badge--joined">✓ Joined</span>"#,
        }
    } else {
        ""
    };
    let complete_badge = if pool.is_complete() {
        match lang {
            Language::Hi => r#"<span class="pool-badge pool-badge--complete">🎯 पूर्ण</span>"#,
            _ => r#"<span class="pool-badge pool-badge--complete">🎯 Complete</span>"#,
        }
    } else {
        ""
    };

    let countdown = pool.time_remaining(now).label();
    let left_word = match lang {
        Language::Hi => "बचा है",
        _ => "left",
    };

    let labels = match lang {
        Language::Hi => [
            "प्रगति:",
            "सदस्य",
            "बचत:",
            "बचत का विवरण",
            "व्यक्तिगत मूल्य:",
            "ग्रुप मूल्य:",
        ],
        _ => [
            "Progress:",
            "members",
            "Savings:",
            "Savings Breakdown",
            "Individual Price:",
            "Group Price:",
        ],
    };

    let actions = if pool.is_joined {
        let (contribution_label, leave_label) = match lang {
            Language::Hi => ("आपका योगदान:", "छोड़ें"),
            _ => ("Your Contribution:", "Leave Pool"),
        };
        format!(
            r#"<div class="pool-contribution"><span>{contribution_label}</span><strong>{}kg</strong></div>
        <button class="btn-leave">{leave_label}</button>"#,
            pool.my_contribution
        )
    } else {
        let join_label = match lang {
            Language::Hi => "शामिल हों",
            _ => "Join Pool",
        };
        if pool.can_join() {
            format!(r#"<button class="btn-join">👥 {join_label}</button>"#)
        } else {
            format!(r#"<button class="btn-join" disabled>👥 {join_label}</button>"#)
        }
    };

    format!(
        r#"<article class="pool-card{joined_class}" data-pool-id="{id}">
    <div class="pool-card-heading">
        <div>
            <h3>{name} {joined_badge}{complete_badge}</h3>
            <p class="pool-meta">📍 {location} · ⏰ {countdown} {left_word}</p>
        </div>
        <div class="pool-prices">
            <span class="price-target">{target_price}</span>
            <span class="price-previous">{current_price}</span>
        </div>
    </div>
    <div class="pool-progress">
        <div class="progress-labels"><span>{progress_label} {current}kg / {target}kg</span><span>{percent:.0}%</span></div>
        <div class="progress-track"><div class="progress-fill" style="width: {display:.0}%"></div></div>
        <div class="progress-labels progress-labels--small"><span>{participants}/{max_participants} {members_word}</span><span>{savings_label} {savings}</span></div>
    </div>
    <div class="savings-breakdown">
        <p>📉 {breakdown_label}</p>
        <div class="breakdown-grid">
            <div><span>{individual_label}</span><strong>{current_price}/kg</strong></div>
            <div><span>{group_label}</span><strong>{target_price}/kg</strong></div>
        </div>
    </div>
    <div class="pool-actions">{actions}</div>
</article>"#,
        joined_class = if pool.is_joined { " pool-card--joined" } else { "" },
        id = pool.id,
        name = escape_html(name),
        joined_badge = joined_badge,
        complete_badge = complete_badge,
        location = escape_html(&pool.location),
        countdown = countdown,
        left_word = left_word,
        target_price = pool.target_price.display(),
        current_price = pool.current_price.display(),
        progress_label = labels[0],
        current = pool.current_quantity,
        target = pool.target_quantity,
        percent = pool.progress_percent(),
        display = pool.display_progress(),
        participants = pool.participants,
        max_participants = pool.max_participants,
        members_word = labels[1],
        savings_label = labels[2],
        savings = pool.savings.display(),
        breakdown_label = labels[3],
        individual_label = labels[4],
        group_label = labels[5],
        actions = actions
    )
}

fn render_how_it_works(lang: Language) -> String {
    let (title, steps): (&str, [(&str, &str); 3]) = match lang {
        Language::Hi => (
            "यह कैसे काम करता है?",
            [
                ("1. ग्रुप में शामिल हों", "अपने क्षेत्र के पास का ग्रुप चुनें और अपना योगदान दें"),
                ("2. लक्ष्य पूरा करें", "जब ग्रुप का लक्ष्य पूरा हो जाए, ऑर्डर अपने आप हो जाएगा"),
                ("3. डिलीवरी पाएं", "बेहतर दाम पर अपना सामान सीधे घर पर पाएं"),
            ],
        ),
        _ => (
            "How It Works?",
            [
                (
                    "1. Join a Pool",
                    "Choose a pool near your area and add your contribution",
                ),
                (
                    "2. Reach Target",
                    "When the pool reaches its target, order is automatically placed",
                ),
                (
                    "3. Get Delivery",
                    "Receive your goods at better prices directly at your location",
                ),
            ],
        ),
    };

    let step_cards: String = steps
        .iter()
        .map(|(heading, detail)| {
            format!(r#"<div class="step-card"><h4>{heading}</h4><p>{detail}</p></div>"#)
        })
        .collect();

    format!(
        r#"<div class="how-it-works">
    <h3>🎯 {title}</h3>
    <div class="step-grid">{step_cards}</div>
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
    use chrono::Duration;
    use vendor_commerce::{Money, PoolId};

    fn onion_pool(now: DateTime<Utc>) -> BulkPool {
        BulkPool {
            id: PoolId::from("1"),
            name: "Premium Onions".to_string(),
            name_hi: "प्रीमियम प्याज".to_string(),
            target_quantity: 100,
            current_quantity: 75,
            target_price: Money::from_rupees(22),
            current_price: Money::from_rupees(25),
            savings: Money::from_rupees(300),
            ends_at: now + Duration::hours(4) + Duration::minutes(30),
            location: "Sector 21, Gurgaon".to_string(),
            participants: 8,
            max_participants: 12,
            my_contribution: 10,
            is_joined: true,
        }
    }

    #[test]
    fn test_joined_card_shows_contribution_and_leave() {
        let now = Utc::now();
        let html = render_pool_card(&onion_pool(now), now, Language::En);
        assert!(html.contains("✓ Joined"));
        assert!(html.contains("Your Contribution:"));
        assert!(html.contains("10kg"));
        assert!(html.contains("Leave Pool"));
        assert!(html.contains("75kg / 100kg"));
        assert!(html.contains("75%"));
        assert!(html.contains("4h 30m left"));
    }

    #[test]
    fn test_full_pool_disables_join() {
        let now = Utc::now();
        let mut pool = onion_pool(now);
        pool.is_joined = false;
        pool.my_contribution = 0;
        pool.participants = 12;
        let html = render_pool_card(&pool, now, Language::En);
        assert!(html.contains("disabled"));
        assert!(html.contains("Join Pool"));
    }

    #[test]
    fn test_board_stats_count_joined_pools_only() {
        let now = Utc::now();
        let joined = onion_pool(now);
        let mut open = onion_pool(now);
        open.id = PoolId::from("2");
        open.is_joined = false;
        open.my_contribution = 0;
        open.savings = Money::from_rupees(400);

        let html = render_pool_board(&[joined, open], now, Language::En);
        assert!(html.contains("Potential Savings"));
        assert!(html.contains("₹300"));
        assert!(html.contains("2.5km"));
    }
}
