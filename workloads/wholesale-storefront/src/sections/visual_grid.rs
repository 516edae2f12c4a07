//! Picture-first shopping grid with tap-to-hear product names.

use vendor_commerce::catalog::{Language, Product, ProductCategory};
use vendor_commerce::session::Utterance;

/// Render the Visual tab: products grouped by category, each card with
/// a speak button carrying the speech parameters.
pub fn render_visual_grid(products: &[Product], lang: Language) -> String {
    if products.is_empty() {
        return render_visual_grid_fallback(lang);
    }

    let (title, subtitle) = match lang {
        Language::Hi => ("विज़ुअल शॉपिंग", "छवियों और आवाज़ के साथ आसान खरीदारी"),
        Language::Ta => ("காட்சி கடை", "படங்கள் மற்றும் ஒலியுடன் எளிய கொள்முதல்"),
        _ => ("Visual Shopping", "Easy shopping with images and voice"),
    };

    let groups: String = ProductCategory::ALL
        .iter()
        .filter_map(|category| {
            let members: Vec<&Product> =
                products.iter().filter(|p| p.category == *category).collect();
            if members.is_empty() {
                return None;
            }
            Some(render_category_group(*category, &members, lang))
        })
        .collect();

    format!(
        r#"<section class="visual-grid" data-section="visual">
    <div class="visual-heading">
        <h2>🛒 {title}</h2>
        <p>🔊 {subtitle}</p>
    </div>
    {groups}
</section>"#
    )
}

fn render_category_group(category: ProductCategory, members: &[&Product], lang: Language) -> String {
    let count_word = match lang {
        Language::Hi => "आइटम",
        Language::Ta => "உருப்படிகள்",
        _ => "items",
    };

    let cards: String = members
        .iter()
        .map(|p| render_visual_card(p, lang))
        .collect();

    format!(
        r#"<div class="visual-group">
    <div class="group-heading">
        <span class="group-emoji">{emoji}</span>
        <h3>{label}</h3>
        <span class="group-count">{count} {count_word}</span>
    </div>
    <div class="card-grid card-grid--compact">{cards}</div>
</div>"#,
        emoji = category.emoji(),
        label = category.label(lang),
        count = members.len(),
        count_word = count_word,
        cards = cards
    )
}

/// Render one visual card with its tap-to-hear button.
pub fn render_visual_card(product: &Product, lang: Language) -> String {
    let utterance = Utterance::for_product(product, lang);

    let stock_overlay = if product.in_stock {
        String::new()
    } else {
        let label = match lang {
            Language::Hi => "❌ स्टॉक में नहीं",
            Language::Ta => "❌ கிடைக்கவில்லை",
            _ => "❌ Out of Stock",
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
        Language::Hi => "जोड़ें",
        Language::Ta => "சேர்",
        _ => "Add",
    };
    let add_button = if product.in_stock {
        format!(r#"<button class="btn-add btn-add--small">+ {add_label}</button>"#)
    } else {
        String::new()
    };

    format!(
        r#"<article class="visual-card">
    <div class="card-media">
        <span class="card-emoji card-emoji--large">{emoji}</span>
        {stock_overlay}
    </div>
    <button class="btn-speak" data-speech-text="{text}" data-speech-lang="{lang_tag}" data-speech-rate="{rate}">🔊</button>
    <h3>{name}</h3>
    <div class="price-current">{price}</div>
    <div class="price-unit">{unit}</div>
    {previous}
    {add_button}
</article>"#,
        emoji = product.emoji,
        stock_overlay = stock_overlay,
        text = escape_html(&utterance.text),
        lang_tag = utterance.lang_tag,
        rate = utterance.rate,
        name = escape_html(product.display_name(lang)),
        price = product.price.display(),
        unit = escape_html(&product.unit),
        previous = previous,
        add_button = add_button
    )
}

/// Render the grid placeholder when the catalog is empty.
pub fn render_visual_grid_fallback(lang: Language) -> String {
    let message = match lang {
        Language::Hi => "कोई उत्पाद उपलब्ध नहीं है",
        Language::Ta => "தயாரிப்புகள் எதுவும் இல்லை",
        _ => "No products available right now.",
    };
    format!(
        r#"<section class="visual-grid visual-grid--empty" data-section="visual">
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
    use vendor_commerce::catalog::LocalizedName;
    use vendor_commerce::Money;

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
                "5",
                LocalizedName::new("Green Apples", "हरे सेब", "பச்சை ஆப்பிள்"),
                Money::from_rupees(120),
                Money::from_rupees(110),
                "per kg",
                4.6,
                ProductCategory::Fruits,
                "🍏",
            ),
        ]
    }

    #[test]
    fn test_groups_by_category_in_display_order() {
        let html = render_visual_grid(&catalog(), Language::En);
        let veg = html.find("Vegetables").unwrap();
        let fruit = html.find("Fruits").unwrap();
        assert!(veg < fruit);
        assert!(html.contains("1 items"));
    }

    #[test]
    fn test_speak_button_carries_speech_parameters() {
        let html = render_visual_card(&catalog()[0], Language::Ta);
        assert!(html.contains(r#"data-speech-lang="ta-IN""#));
        assert!(html.contains(r#"data-speech-rate="0.8""#));
        assert!(html.contains("வெங்காயம்"));
    }

    #[test]
    fn test_tamil_heading() {
        let html = render_visual_grid(&catalog(), Language::Ta);
        assert!(html.contains("காட்சி கடை"));
    }
}
