//! Product catalog module.
//!
//! Contains the storefront product types, display languages, and
//! bulk-discount pricing.

mod bulk;
mod product;

pub use bulk::{total_savings, BulkCategory, BulkProduct, BulkQuote};
pub use product::{
    Language, LocalizedName, PriceChange, PriceDirection, Product, ProductCategory,
};
