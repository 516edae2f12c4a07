//! Retail and wholesale catalog seeds.

use vendor_commerce::catalog::{
    BulkCategory, BulkProduct, LocalizedName, Product, ProductCategory,
};
use vendor_commerce::{Money, ProductId};

/// The retail catalog shown on the Products and Visual tabs.
pub fn seed_products() -> Vec<Product> {
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
            "2",
            LocalizedName::new("Ripe Tomatoes", "पके टमाटर", "தக்காளி"),
            Money::from_rupees(40),
            Money::from_rupees(35),
            "per kg",
            4.2,
            ProductCategory::Vegetables,
            "🍅",
        ),
        Product::new(
            "3",
            LocalizedName::new("Basmati Rice", "बासमती चावल", "பாஸ்மதி அரிசி"),
            Money::from_rupees(60),
            Money::from_rupees(60),
            "per kg",
            4.8,
            ProductCategory::Grains,
            "🍚",
        ),
        Product::new(
            "4",
            LocalizedName::new("Farm Potatoes", "खेत के आलू", "உருளைக்கிழங்கு"),
            Money::from_rupees(20),
            Money::from_rupees(22),
            "per kg",
            4.3,
            ProductCategory::Vegetables,
            "🥔",
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
        Product::new(
            "6",
            LocalizedName::new("Fresh Bananas", "ताज़े केले", "வாழைப்பழம்"),
            Money::from_rupees(50),
            Money::from_rupees(55),
            "per dozen",
            4.4,
            ProductCategory::Fruits,
            "🍌",
        )
        .out_of_stock(),
    ]
}

/// The wholesale catalog shown on the Bulk tab.
pub fn seed_bulk_products() -> Vec<BulkProduct> {
    vec![
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
        },
        BulkProduct {
            id: ProductId::from("2"),
            name: "Wheat Flour".to_string(),
            name_hi: "गेहूं का आटा".to_string(),
            price: Money::from_rupees(40),
            previous_price: Money::from_rupees(45),
            unit: "kg".to_string(),
            rating: 4.3,
            category: BulkCategory::Grains,
            min_quantity: 50,
            bulk_price: Money::from_rupees(35),
            savings_percent: 12.5,
        },
        BulkProduct {
            id: ProductId::from("3"),
            name: "Sugar".to_string(),
            name_hi: "चीनी".to_string(),
            price: Money::from_rupees(45),
            previous_price: Money::from_rupees(50),
            unit: "kg".to_string(),
            rating: 4.2,
            category: BulkCategory::Sweeteners,
            min_quantity: 30,
            bulk_price: Money::from_rupees(42),
            savings_percent: 6.7,
        },
        BulkProduct {
            id: ProductId::from("4"),
            name: "Cooking Oil".to_string(),
            name_hi: "खाना पकाने का तेल".to_string(),
            price: Money::from_rupees(180),
            previous_price: Money::from_rupees(200),
            unit: "liter".to_string(),
            rating: 4.4,
            category: BulkCategory::Oils,
            min_quantity: 20,
            bulk_price: Money::from_rupees(165),
            savings_percent: 8.3,
        },
        BulkProduct {
            id: ProductId::from("5"),
            name: "Dal (Toor)".to_string(),
            name_hi: "तूर दाल".to_string(),
            price: Money::from_rupees(120),
            previous_price: Money::from_rupees(140),
            unit: "kg".to_string(),
            rating: 4.6,
            category: BulkCategory::Pulses,
            min_quantity: 25,
            bulk_price: Money::from_rupees(105),
            savings_percent: 12.5,
        },
        BulkProduct {
            id: ProductId::from("6"),
            name: "Onions".to_string(),
            name_hi: "प्याज".to_string(),
            price: Money::from_rupees(25),
            previous_price: Money::from_rupees(30),
            unit: "kg".to_string(),
            rating: 4.1,
            category: BulkCategory::Vegetables,
            min_quantity: 50,
            bulk_price: Money::from_rupees(20),
            savings_percent: 20.0,
        },
    ]
}
