//! Retail product grid with price-trend badges.

use vendor_commerce::catalog::{Language, PriceDirection, Product};

/// Render the Products tab: heading plus one card per catalog item.
pub fn render_product_grid(products: &[Product], lang: Language) -> String {
    if products.is_empty() {
        return render_product_grid_fallback(lang);
    }

    let heading = match lang {
        Language::Hi => ("सभी उत्पाद", "ताज़ा और गुणवत्तापूर्ण उत्पाद"),
        _ => ("All Products", "Fresh & quality products"),
    };

    let cards: String = products
        .iter()
        .map(|p| render_product_card(p, lang))
        .collect();

    format!(
        r#"<section class="product-grid" data-section="products">
    <div class="grid-heading">
        <h2>{title}</h2>
        <p>{subtitle}</p>
    </div>
    <div class="card-grid">{cards}</div>
</section>"#,
        title = heading.0,
        subtitle = heading.1,
        cards = cards
    )
}

/// Render one retail product card.
pub fn render_product_card(product: &Product, lang: Language) -> String {
    let change = product.price_change();
    let trend_badge = match change.direction {
        PriceDirection::Increase => format!(
            r#"<span class="trend-badge trend-up">↑ +{}%</span>"#,
            change.percent_label()
        ),
        PriceDirection::Decrease => format!(
            r#"<span class="trend-badge trend-down">↓ -{}%</span>"#,
            change.percent_label()
        ),
        PriceDirection::Unchanged => String::new(),
    };

    let stock_overlay = if product.in_stock {
        String::new()
    } else {
        let label = match lang {
            Language::Hi => "स्टॉक में नहीं",
            _ => "Out of Stock",
        };
        format!(r#"<div class="stock-overlay"><span>{label}</span></div>"#)
    };

    let previous = if product.shows_previous_price() {
        format!(
            r#"<div class="price-previous">{}</div>"#,
            product.previous_price.display()
        )
    } else {
        String::new()
    };

    let add_label = match lang {
        Language::Hi => "कार्ट में डालें",
        _ => "Add to Cart",
    };
    let add_button = if product.in_stock {
        format!(
            r#"<button class="btn-add" data-product-id="{}">🛒 {add_label}</button>"#,
            product.id
        )
    } else {
        format!(r#"<button class="btn-add" disabled>🛒 {add_label}</button>"#)
    };

    format!(
        r#"<article class="product-card">
    <div class="card-media">
        <span class="card-emoji">{emoji}</span>
        {trend_badge}
        {stock_overlay}
    </div>
    <div class="card-body">
        <div class="card-title-row">
            <h3>{name}</h3>
            <span class="rating">★ {rating:.1}</span>
        </div>
        <div class="price-row">
            <span class="price-current">{price}</span>
            <span class="price-unit">{unit}</span>
        </div>
        {previous}
    </div>
    <div class="card-footer">{add_button}</div>
</article>"#,
        emoji = product.emoji,
        trend_badge = trend_badge,
        stock_overlay = stock_overlay,
        name = escape_html(product.display_name(lang)),
        rating = product.rating,
        price = product.price.display(),
        unit = escape_html(&product.unit),
        previous = previous,
        add_button = add_button
    )
}

/// Render the grid placeholder when the catalog is empty.
pub fn render_product_grid_fallback(lang: Language) -> String {
    let message = match lang {
        Language::Hi => "कोई उत्पाद उपलब्ध नहीं है",
        _ => "No products available right now.",
    };
    format!(
        r#"<section class="product-grid product-grid--empty" data-section="products">
    <p>{message}</p>
</section>"#
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
    use vendor_commerce::catalog::{LocalizedName, ProductCategory};
    use vendor_commerce::Money;

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

    #[test]
    fn test_card_shows_drop_badge_and_previous_price() {
        let html = render_product_card(&onions(), Language::En);
        assert!(html.contains("↓ -16.7%"));
        assert!(html.contains("₹25"));
        assert!(html.contains("₹30"));
        assert!(html.contains("★ 4.5"));
    }

    #[test]
    fn test_out_of_stock_card_disables_add() {
        let html = render_product_card(&onions().out_of_stock(), Language::En);
        assert!(html.contains("Out of Stock"));
        assert!(html.contains("disabled"));
    }

    #[test]
    fn test_hindi_card_uses_hindi_name() {
        let html = render_product_card(&onions(), Language::Hi);
        assert!(html.contains("ताज़ा प्याज"));
        assert!(html.contains("कार्ट में डालें"));
    }

    #[test]
    fn test_empty_catalog_renders_fallback() {
        let html = render_product_grid(&[], Language::En);
        assert!(html.contains("product-grid--empty"));
    }
}
