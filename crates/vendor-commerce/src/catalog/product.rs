//! Product and display-language types.

use crate::ids::ProductId;
use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Display languages offered by the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    En,
    Hi,
    Ta,
    Te,
    Kn,
    Mr,
}

impl Language {
    /// All languages in menu order.
    pub const ALL: [Language; 6] = [
        Language::En,
        Language::Hi,
        Language::Ta,
        Language::Te,
        Language::Kn,
        Language::Mr,
    ];

    /// Get the language code (e.g., "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Hi => "hi",
            Language::Ta => "ta",
            Language::Te => "te",
            Language::Kn => "kn",
            Language::Mr => "mr",
        }
    }

    /// Get the name shown in the language menu, in the language itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Hi => "हिंदी",
            Language::Ta => "தமிழ்",
            Language::Te => "తెలుగు",
            Language::Kn => "ಕನ್ನಡ",
            Language::Mr => "मराठी",
        }
    }

    /// Get the BCP-47 tag used for speech synthesis.
    pub fn speech_tag(&self) -> &'static str {
        match self {
            Language::Hi => "hi-IN",
            Language::Ta => "ta-IN",
            _ => "en-IN",
        }
    }

    /// Parse a language code string.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.to_lowercase().as_str() {
            "en" => Some(Language::En),
            "hi" => Some(Language::Hi),
            "ta" => Some(Language::Ta),
            "te" => Some(Language::Te),
            "kn" => Some(Language::Kn),
            "mr" => Some(Language::Mr),
            _ => None,
        }
    }
}

/// Product category in the retail catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ProductCategory {
    #[default]
    Vegetables,
    Fruits,
    Grains,
    Spices,
}

impl ProductCategory {
    /// All categories in display order.
    pub const ALL: [ProductCategory; 4] = [
        ProductCategory::Vegetables,
        ProductCategory::Fruits,
        ProductCategory::Grains,
        ProductCategory::Spices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "vegetables",
            ProductCategory::Fruits => "fruits",
            ProductCategory::Grains => "grains",
            ProductCategory::Spices => "spices",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "vegetables" => Some(ProductCategory::Vegetables),
            "fruits" => Some(ProductCategory::Fruits),
            "grains" => Some(ProductCategory::Grains),
            "spices" => Some(ProductCategory::Spices),
            _ => None,
        }
    }

    /// Category heading in the given language.
    pub fn label(&self, lang: Language) -> &'static str {
        match (self, lang) {
            (ProductCategory::Vegetables, Language::Hi) => "सब्जियां",
            (ProductCategory::Vegetables, Language::Ta) => "காய்கறிகள்",
            (ProductCategory::Vegetables, _) => "Vegetables",
            (ProductCategory::Fruits, Language::Hi) => "फल",
            (ProductCategory::Fruits, Language::Ta) => "பழங்கள்",
            (ProductCategory::Fruits, _) => "Fruits",
            (ProductCategory::Grains, Language::Hi) => "अनाज",
            (ProductCategory::Grains, Language::Ta) => "தானியங்கள்",
            (ProductCategory::Grains, _) => "Grains",
            (ProductCategory::Spices, Language::Hi) => "मसाले",
            (ProductCategory::Spices, Language::Ta) => "மசால்",
            (ProductCategory::Spices, _) => "Spices",
        }
    }

    /// Emoji shown next to the category heading.
    pub fn emoji(&self) -> &'static str {
        match self {
            ProductCategory::Vegetables => "🥬",
            ProductCategory::Fruits => "🍎",
            ProductCategory::Grains => "🌾",
            ProductCategory::Spices => "🌶️",
        }
    }
}

/// A product name in the languages the catalog carries translations for.
///
/// Languages without a translation fall back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LocalizedName {
    pub en: String,
    pub hi: String,
    pub ta: String,
}

impl LocalizedName {
    pub fn new(en: impl Into<String>, hi: impl Into<String>, ta: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            hi: hi.into(),
            ta: ta.into(),
        }
    }

    /// The name in the given language, falling back to English.
    pub fn of(&self, lang: Language) -> &str {
        let translated = match lang {
            Language::Hi => &self.hi,
            Language::Ta => &self.ta,
            _ => &self.en,
        };
        if translated.is_empty() {
            &self.en
        } else {
            translated
        }
    }
}

/// Direction of a price movement since the last listed price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PriceDirection {
    Increase,
    Decrease,
    Unchanged,
}

/// A price movement relative to the previous listed price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceChange {
    pub direction: PriceDirection,
    /// Magnitude in percent of the previous price.
    pub percent: f64,
}

impl PriceChange {
    /// The percentage the badge shows: one decimal place, or "0" when the
    /// price did not move.
    pub fn percent_label(&self) -> String {
        match self.direction {
            PriceDirection::Unchanged => "0".to_string(),
            _ => format!("{:.1}", self.percent),
        }
    }
}

/// A product in the storefront catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Display names by language.
    pub name: LocalizedName,
    /// Current unit price.
    pub price: Money,
    /// Previously listed unit price, for the change badge.
    pub previous_price: Money,
    /// Unit label (e.g., "per kg", "per dozen").
    pub unit: String,
    /// Customer rating out of 5.
    pub rating: f32,
    /// Whether the product can currently be ordered.
    pub in_stock: bool,
    /// Catalog category.
    pub category: ProductCategory,
    /// Emoji used as the product image stand-in.
    pub emoji: String,
}

impl Product {
    /// Create a new in-stock product.
    pub fn new(
        id: impl Into<ProductId>,
        name: LocalizedName,
        price: Money,
        previous_price: Money,
        unit: impl Into<String>,
        rating: f32,
        category: ProductCategory,
        emoji: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            price,
            previous_price,
            unit: unit.into(),
            rating,
            in_stock: true,
            category,
            emoji: emoji.into(),
        }
    }

    /// Mark the product out of stock.
    pub fn out_of_stock(mut self) -> Self {
        self.in_stock = false;
        self
    }

    /// The display name in the given language.
    pub fn display_name(&self, lang: Language) -> &str {
        self.name.of(lang)
    }

    /// Price movement since the previous listed price.
    pub fn price_change(&self) -> PriceChange {
        let current = self.price.amount_paise;
        let previous = self.previous_price.amount_paise;
        if previous == 0 || current == previous {
            return PriceChange {
                direction: PriceDirection::Unchanged,
                percent: 0.0,
            };
        }
        let delta = (current - previous).abs() as f64;
        let percent = delta / previous as f64 * 100.0;
        let direction = if current > previous {
            PriceDirection::Increase
        } else {
            PriceDirection::Decrease
        };
        PriceChange { direction, percent }
    }

    /// Whether the previous price differs and should be struck through.
    pub fn shows_previous_price(&self) -> bool {
        self.price != self.previous_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn test_display_name_per_language() {
        let p = onions();
        assert_eq!(p.display_name(Language::En), "Fresh Onions");
        assert_eq!(p.display_name(Language::Hi), "ताज़ा प्याज");
        assert_eq!(p.display_name(Language::Ta), "வெங்காயம்");
    }

    #[test]
    fn test_display_name_falls_back_to_english() {
        let p = onions();
        assert_eq!(p.display_name(Language::Te), "Fresh Onions");

        let partial = Product::new(
            "9",
            LocalizedName::new("Jaggery", "", ""),
            Money::from_rupees(60),
            Money::from_rupees(60),
            "per kg",
            4.0,
            ProductCategory::Grains,
            "🟤",
        );
        assert_eq!(partial.display_name(Language::Hi), "Jaggery");
    }

    #[test]
    fn test_price_decrease_percent() {
        // 30 -> 25 is a 16.7% drop
        let change = onions().price_change();
        assert_eq!(change.direction, PriceDirection::Decrease);
        assert_eq!(change.percent_label(), "16.7");
    }

    #[test]
    fn test_price_increase_percent() {
        // 35 -> 40 is a 14.3% rise
        let p = Product::new(
            "2",
            LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
            Money::from_rupees(40),
            Money::from_rupees(35),
            "per kg",
            4.2,
            ProductCategory::Vegetables,
            "🍅",
        );
        let change = p.price_change();
        assert_eq!(change.direction, PriceDirection::Increase);
        assert_eq!(change.percent_label(), "14.3");
    }

    #[test]
    fn test_unchanged_price() {
        let p = Product::new(
            "3",
            LocalizedName::new("Basmati Rice", "बासमती चावल", "பாஸ்மதி அரிசி"),
            Money::from_rupees(60),
            Money::from_rupees(60),
            "per kg",
            4.8,
            ProductCategory::Grains,
            "🍚",
        );
        let change = p.price_change();
        assert_eq!(change.direction, PriceDirection::Unchanged);
        assert_eq!(change.percent_label(), "0");
        assert!(!p.shows_previous_price());
    }

    #[test]
    fn test_out_of_stock_builder() {
        let p = onions().out_of_stock();
        assert!(!p.in_stock);
    }

    #[test]
    fn test_language_codes_round_trip() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
    }

    #[test]
    fn test_speech_tags() {
        assert_eq!(Language::Hi.speech_tag(), "hi-IN");
        assert_eq!(Language::Ta.speech_tag(), "ta-IN");
        assert_eq!(Language::Te.speech_tag(), "en-IN");
        assert_eq!(Language::En.speech_tag(), "en-IN");
    }
}
