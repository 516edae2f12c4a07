use anyhow::{anyhow, Result};
use chrono::Utc;
use vendor_commerce::catalog::{PriceDirection, Product, ProductCategory};
use wholesale_storefront::StorefrontData;

use super::{resolve_language, CatalogArgs};
use crate::context::Context;
use crate::output::status_badge;

const CATALOG_WIDTHS: [usize; 8] = [4, 3, 22, 8, 16, 10, 7, 12];
const BULK_WIDTHS: [usize; 6] = [4, 22, 8, 8, 10, 6];

pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let lang = resolve_language(args.lang.as_deref(), ctx)?;
    let data = StorefrontData::seed(Utc::now());

    let category = args
        .category
        .as_deref()
        .map(|s| {
            ProductCategory::from_str(s).ok_or_else(|| {
                anyhow!("Unknown category: {} (expected vegetables, fruits, grains, or spices)", s)
            })
        })
        .transpose()?;

    let products: Vec<&Product> = data
        .products
        .iter()
        .filter(|p| category.map_or(true, |c| p.category == c))
        .collect();

    if ctx.output.is_json() {
        if args.bulk {
            ctx.output.json(&serde_json::json!({
                "products": products,
                "bulk": data.bulk_products,
            }));
        } else {
            ctx.output.json(&products);
        }
        return Ok(());
    }

    ctx.output.header("Product Catalog");

    ctx.output.table_row(
        &["ID", "", "NAME", "PRICE", "WAS", "UNIT", "RATING", "STOCK"],
        &CATALOG_WIDTHS,
    );
    ctx.output.info(&"-".repeat(84));

    for product in &products {
        let price = product.price.display();
        let was = if product.shows_previous_price() {
            let change = product.price_change();
            let sign = match change.direction {
                PriceDirection::Increase => "+",
                PriceDirection::Decrease => "-",
                PriceDirection::Unchanged => "",
            };
            format!("{} ({}{}%)", product.previous_price.display(), sign, change.percent_label())
        } else {
            "-".to_string()
        };
        let rating = format!("{:.1}", product.rating);
        let stock = if product.in_stock {
            status_badge("in stock")
        } else {
            status_badge("out of stock")
        };

        ctx.output.table_row(
            &[
                product.id.as_str(),
                &product.emoji,
                product.display_name(lang),
                &price,
                &was,
                &product.unit,
                &rating,
                &stock,
            ],
            &CATALOG_WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} product(s)", products.len()));

    if args.bulk {
        print_bulk(&data, ctx);
    }

    Ok(())
}

fn print_bulk(data: &StorefrontData, ctx: &Context) {
    ctx.output.info("");
    ctx.output.header("Wholesale Bulk Prices");

    ctx.output.table_row(
        &["ID", "NAME", "PRICE", "BULK", "MIN QTY", "SAVE"],
        &BULK_WIDTHS,
    );
    ctx.output.info(&"-".repeat(64));

    for listing in &data.bulk_products {
        let price = listing.price.display();
        let bulk = listing.bulk_price.display();
        let min_qty = format!("{} {}", listing.min_quantity, listing.unit);
        let save = format!("{:.0}%", listing.savings_percent);

        ctx.output.table_row(
            &[listing.id.as_str(), &listing.name, &price, &bulk, &min_qty, &save],
            &BULK_WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.info(&format!("Total: {} listing(s)", data.bulk_products.len()));
}
