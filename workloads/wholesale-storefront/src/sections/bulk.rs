//! Wholesale bulk-ordering board.
//!
//! This tab renders in English only, matching the wholesale supplier
//! listings it mirrors.

use std::collections::HashMap;

use vendor_commerce::catalog::{total_savings, BulkCategory, BulkProduct};
use vendor_commerce::{Money, ProductId};

/// Render the Bulk tab: category chips, the savings strip, one card per
/// listing, and the benefits box. `quantities` holds the vendor's
/// in-progress order quantities keyed by product.
pub fn render_bulk_board(
    products: &[BulkProduct],
    filter: BulkCategory,
    quantities: &HashMap<ProductId, u32>,
) -> String {
    if products.is_empty() {
        return render_bulk_board_fallback();
    }

    let chips: String = BulkCategory::ALL
        .iter()
        .map(|category| {
            let class = if *category == filter {
                "chip chip--active"
            } else {
                "chip"
            };
            format!(
                r#"<a class="{class}" href="?bulk={id}">{icon} {label}</a>"#,
                id = category.as_str(),
                icon = category.emoji(),
                label = category.label()
            )
        })
        .collect();

    let visible: Vec<&BulkProduct> = products
        .iter()
        .filter(|p| filter.matches(p.category))
        .collect();

    let total = total_savings(
        visible
            .iter()
            .map(|p| (*p, quantities.get(&p.id).copied().unwrap_or(0))),
    );
    let savings_strip = render_savings_strip(&total);

    let cards: String = visible
        .iter()
        .map(|p| render_bulk_card(p, quantities.get(&p.id).copied().unwrap_or(0)))
        .collect();

    format!(
        r#"<section class="bulk-board" data-section="bulk">
    <div class="bulk-heading">
        <h2>📦 Bulk Ordering System</h2>
        <p>Order in bulk quantities for better prices and wholesale rates</p>
    </div>
    <div class="chip-row">{chips}</div>
    {savings_strip}
    <div class="card-grid">{cards}</div>
    {benefits}
</section>"#,
        chips = chips,
        savings_strip = savings_strip,
        cards = cards,
        benefits = render_bulk_benefits()
    )
}

/// Render the board placeholder when no wholesale listings exist.
pub fn render_bulk_board_fallback() -> String {
    r#"<section class="bulk-board bulk-board--empty" data-section="bulk">
    <p>No bulk listings available right now.</p>
</section>"#
        .to_string()
}

/// Render the green strip summing savings across the order. Empty when
/// nothing is saved yet.
pub fn render_savings_strip(total: &Money) -> String {
    if !total.is_positive() {
        return String::new();
    }
    format!(
        r#"<div class="savings-strip">
        <span class="savings-total">Total Savings: {}</span>
        <span>You're saving money with bulk orders! 💰</span>
    </div>"#,
        total.display_fixed()
    )
}

/// Render one wholesale listing card at the given order quantity.
pub fn render_bulk_card(product: &BulkProduct, quantity: u32) -> String {
    let qualifies = product.qualifies(quantity);
    let quote = product.quote(quantity);

    let regular_class = if qualifies {
        "price-line price-line--struck"
    } else {
        "price-line"
    };
    let bulk_price_line = if qualifies {
        format!(
            r#"<div class="price-line price-line--bulk"><span>Bulk Price:</span><span>{}/{}</span></div>"#,
            product.bulk_price.display(),
            product.unit
        )
    } else {
        String::new()
    };

    let shortfall_hint = if quantity > 0 && quote.shortfall > 0 {
        format!(
            r#"<div class="shortfall-hint">Add {} more {} for bulk discount</div>"#,
            quote.shortfall, product.unit
        )
    } else {
        String::new()
    };

    let totals = if quantity > 0 {
        let save_line = if quote.savings.is_positive() {
            format!(
                r#"<div class="total-line total-line--save"><span>You Save:</span><span>{}</span></div>"#,
                quote.savings.display_fixed()
            )
        } else {
            String::new()
        };
        format!(
            r#"<div class="card-totals">
        <div class="total-line"><span>Total:</span><span>{}</span></div>
        {save_line}
    </div>"#,
            quote.line_total.display_fixed()
        )
    } else {
        String::new()
    };

    let add_button = if quantity > 0 {
        r#"<button class="btn-add">🛒 Add to Cart</button>"#
    } else {
        r#"<button class="btn-add" disabled>🛒 Add to Cart</button>"#
    };

    format!(
        r#"<article class="bulk-card{highlight}" data-product-id="{id}">
    <div class="card-title-row">
        <span class="card-emoji">📦</span>
        <div>
            <h3>{name}</h3>
            <p class="name-hindi">{name_hi}</p>
            <p class="card-category">{category}</p>
        </div>
        <span class="rating">★ {rating:.1}</span>
    </div>
    <div class="{regular_class}"><span>Regular Price:</span><span>{price}/{unit}</span></div>
    {bulk_price_line}
    <div class="price-line"><span>Min. Quantity:</span><span class="min-badge">{min} {unit}</span></div>
    <div class="quantity-row">
        <span>Quantity:</span>
        <div class="stepper">
            <button class="btn-step">−</button>
            <input type="number" value="{quantity}" min="0">
            <button class="btn-step">+</button>
        </div>
    </div>
    {shortfall_hint}
    {totals}
    {add_button}
</article>"#,
        highlight = if qualifies { " bulk-card--unlocked" } else { "" },
        id = product.id,
        name = escape_html(&product.name),
        name_hi = escape_html(&product.name_hi),
        category = product.category.label(),
        rating = product.rating,
        regular_class = regular_class,
        price = product.price.display(),
        unit = product.unit,
        bulk_price_line = bulk_price_line,
        min = product.min_quantity,
        quantity = quantity,
        shortfall_hint = shortfall_hint,
        totals = totals,
        add_button = add_button
    )
}

fn render_bulk_benefits() -> String {
    r#"<div class="bulk-benefits">
    <h3>🚚 Bulk Ordering Benefits</h3>
    <ul>
        <li>💰 Better wholesale prices for large quantities</li>
        <li>🚚 Free delivery for orders above ₹2000</li>
        <li>📅 Scheduled weekly/monthly deliveries available</li>
        <li>🤝 Direct vendor relationships for better deals</li>
    </ul>
</div>"#
        .to_string()
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

    fn rice() -> BulkProduct {
        BulkProduct {
            id: ProductId::from("1"),
            name: "Rice (Basmati)".to_string(),
            name_hi: "बासमती चावल".to_string(),
            price: Money::from_rupees(150),
            previous_price: Money::from_rupees(180),
            unit: "kg".to_string(),
            rating: 4.5,
            category: BulkCategory::Grains,
            min_quantity: 25,
            bulk_price: Money::from_rupees(120),
            savings_percent: 20.0,
        }
    }

    #[test]
    fn test_card_below_minimum_shows_shortfall_hint() {
        let html = render_bulk_card(&rice(), 10);
        assert!(html.contains("Add 15 more kg for bulk discount"));
        assert!(!html.contains("Bulk Price:"));
        assert!(html.contains("₹1500.00"));
    }

    #[test]
    fn test_card_at_minimum_unlocks_bulk_price() {
        let html = render_bulk_card(&rice(), 25);
        assert!(html.contains("bulk-card--unlocked"));
        assert!(html.contains("Bulk Price:"));
        assert!(html.contains("You Save:"));
        assert!(html.contains("₹750.00"));
        assert!(!html.contains("shortfall-hint"));
    }

    #[test]
    fn test_card_at_zero_has_no_totals() {
        let html = render_bulk_card(&rice(), 0);
        assert!(!html.contains("card-totals"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_board_filters_by_category_and_sums_savings() {
        let products = vec![rice()];
        let mut quantities = HashMap::new();
        quantities.insert(ProductId::from("1"), 25);

        let html = render_bulk_board(&products, BulkCategory::Grains, &quantities);
        assert!(html.contains("Total Savings: ₹750.00"));

        let html = render_bulk_board(&products, BulkCategory::Oils, &quantities);
        assert!(!html.contains("Rice (Basmati)"));
        assert!(!html.contains("savings-strip"));
    }
}
