//! Interactive storefront session.
//!
//! A menu loop over the same session reducer the rendered pages use.
//! Everything starts from the seeded demo data and lives for the
//! session; the only asynchronous step is the simulated payment.

use std::time::{Duration, Instant};

use anyhow::{bail, Result};
use chrono::Utc;
use dialoguer::{Confirm, Input, Select};
use vendor_commerce::cart::DeliveryPolicy;
use vendor_commerce::catalog::Language;
use vendor_commerce::checkout::{PaymentGateway, PaymentMethod, PaymentRequest};
use vendor_commerce::session::{
    ConnectivityMonitor, Session, SessionEvent, VoiceSession, VOICE_TICK,
};
use wholesale_storefront::StorefrontData;

use super::{resolve_language, ShopArgs};
use crate::context::Context;
use crate::output::status_badge;

const CART_WIDTHS: [usize; 4] = [24, 6, 12, 12];

pub async fn run(args: ShopArgs, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        bail!("The shop command is interactive; JSON output is not supported");
    }

    let now = Utc::now();
    let data = StorefrontData::seed(now);
    let policy = ctx.config.delivery_policy();
    let lang = resolve_language(args.lang.as_deref(), ctx)?;

    let mut session = Session::new();
    session.apply(SessionEvent::SetLanguage(lang));

    ctx.output.header(&ctx.config.store.name);
    ctx.output.info("Fresh & quality products, in your language");

    let monitor = ConnectivityMonitor::new()
        .with_offline_probability(ctx.config.connectivity.offline_probability);
    let interval = Duration::from_secs(ctx.config.connectivity.interval_secs);
    session.apply(SessionEvent::ConnectivityChanged(
        monitor.sample(&mut rand::thread_rng()),
    ));
    let mut last_sample = Instant::now();

    loop {
        if last_sample.elapsed() >= interval {
            session.apply(SessionEvent::ConnectivityChanged(
                monitor.sample(&mut rand::thread_rng()),
            ));
            last_sample = Instant::now();
        }

        ctx.output.info("");
        let connection = if session.is_online { "online" } else { "offline" };
        ctx.output.kv("Connection", &status_badge(connection));

        let cart_label = format!("View cart ({} items)", session.cart.total_items());
        let choices = [
            "Browse products",
            "Wholesale bulk prices",
            "Group pools",
            "Voice order",
            cart_label.as_str(),
            "Checkout",
            "Switch language",
            "Quit",
        ];
        let choice = Select::new()
            .with_prompt("What would you like to do?")
            .items(&choices)
            .default(0)
            .interact()?;

        match choice {
            0 => browse_products(&mut session, &data, ctx)?,
            1 => quote_bulk(&data, ctx)?,
            2 => super::pools::print_pools(&data.pools, now, session.language, ctx),
            3 => voice_order(&mut session, &data, ctx).await?,
            4 => show_cart(&mut session, &policy, ctx)?,
            5 => {
                if checkout(&mut session, &policy, ctx).await? {
                    break;
                }
            }
            6 => switch_language(&mut session, ctx)?,
            _ => break,
        }
    }

    Ok(())
}

fn browse_products(session: &mut Session, data: &StorefrontData, ctx: &Context) -> Result<()> {
    let lang = session.language;
    let mut items: Vec<String> = data
        .products
        .iter()
        .map(|p| {
            let mut label = format!(
                "{} {} - {} {}",
                p.emoji,
                p.display_name(lang),
                p.price.display(),
                p.unit
            );
            if !p.in_stock {
                label.push_str(" (out of stock)");
            }
            label
        })
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Pick a product")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == data.products.len() {
        return Ok(());
    }

    let product = &data.products[choice];
    if !product.in_stock {
        ctx.output
            .warn(&format!("{} is out of stock", product.display_name(lang)));
        return Ok(());
    }

    let quantity: u32 = Input::new()
        .with_prompt("Quantity (kg)")
        .default(1)
        .interact_text()?;
    if quantity == 0 {
        return Ok(());
    }

    session.apply(SessionEvent::AddToCart {
        product: product.clone(),
        quantity,
    });
    ctx.output.success(&format!(
        "Added {} × {} ({} items in cart)",
        quantity,
        product.display_name(lang),
        session.cart.total_items()
    ));
    Ok(())
}

fn quote_bulk(data: &StorefrontData, ctx: &Context) -> Result<()> {
    let mut items: Vec<String> = data
        .bulk_products
        .iter()
        .map(|p| {
            format!(
                "{} - {} (bulk {} from {} {})",
                p.name,
                p.price.display(),
                p.bulk_price.display(),
                p.min_quantity,
                p.unit
            )
        })
        .collect();
    items.push("Back".to_string());

    let choice = Select::new()
        .with_prompt("Pick a listing")
        .items(&items)
        .default(0)
        .interact()?;
    if choice == data.bulk_products.len() {
        return Ok(());
    }

    let listing = &data.bulk_products[choice];
    let quantity: u32 = Input::new()
        .with_prompt(format!("Quantity ({})", listing.unit))
        .default(listing.min_quantity)
        .interact_text()?;

    let quote = listing.quote(quantity);
    ctx.output.kv("Unit price", &quote.unit_price.display());
    ctx.output.kv("Line total", &quote.line_total.display());
    if quote.shortfall > 0 {
        ctx.output.info(&format!(
            "Add {} more {} to unlock the bulk price {}",
            quote.shortfall,
            listing.unit,
            listing.bulk_price.display()
        ));
    } else if quote.savings.is_positive() {
        ctx.output
            .success(&format!("You save {}", quote.savings.display()));
    }
    Ok(())
}

async fn voice_order(session: &mut Session, data: &StorefrontData, ctx: &Context) -> Result<()> {
    let mut voice = VoiceSession::new();
    voice.start();

    let bar = ctx.output.progress(100, "Listening...");
    loop {
        if voice.tick() {
            break;
        }
        if let Some(progress) = voice.progress() {
            bar.set_position(progress as u64);
        }
        tokio::time::sleep(VOICE_TICK).await;
    }
    bar.finish_and_clear();

    let order = match voice.order() {
        Some(order) => order.clone(),
        None => return Ok(()),
    };

    ctx.output.kv("Heard", &order.transcript);
    ctx.output.kv("Translation", &order.translation);

    let resolved = order.resolve(&data.products);
    if resolved.is_empty() {
        ctx.output.warn("Nothing in the order matched the catalog");
        return Ok(());
    }
    ctx.output
        .debug(&format!("{} draft lines matched", resolved.len()));

    for (product, quantity) in resolved {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Add {} × {} ({} {})?",
                quantity,
                product.display_name(session.language),
                product.price.display(),
                product.unit
            ))
            .default(true)
            .interact()?;
        if confirmed {
            session.apply(SessionEvent::AddToCart {
                product: product.clone(),
                quantity,
            });
        }
    }

    ctx.output
        .success(&format!("{} items in cart", session.cart.total_items()));
    Ok(())
}

fn show_cart(session: &mut Session, policy: &DeliveryPolicy, ctx: &Context) -> Result<()> {
    session.apply(SessionEvent::OpenCart);

    if session.cart.is_empty() {
        ctx.output.info("Your cart is empty");
        session.apply(SessionEvent::CloseOverlay);
        return Ok(());
    }

    let lang = session.language;
    ctx.output.header("Your Cart");
    ctx.output
        .table_row(&["PRODUCT", "QTY", "UNIT PRICE", "TOTAL"], &CART_WIDTHS);
    ctx.output.info(&"-".repeat(60));
    for line in &session.cart.lines {
        let qty = line.quantity.to_string();
        let unit_price = line.product.price.display();
        let total = line.line_total().display();
        ctx.output.table_row(
            &[line.product.display_name(lang), &qty, &unit_price, &total],
            &CART_WIDTHS,
        );
    }
    ctx.output.info("");

    let pricing = session.cart.pricing(policy);
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if pricing.free_delivery() {
        ctx.output.kv("Delivery", "FREE");
    } else {
        ctx.output.kv("Delivery", &pricing.delivery_fee.display());
    }
    ctx.output.kv("Total", &pricing.total.display_fixed());
    if let Some(gap) = policy.amount_to_free_delivery(&pricing.subtotal) {
        ctx.output
            .info(&format!("Add {} more for free delivery", gap.display()));
    }

    let adjust = Confirm::new()
        .with_prompt("Adjust quantities?")
        .default(false)
        .interact()?;
    if adjust {
        let items: Vec<String> = session
            .cart
            .lines
            .iter()
            .map(|l| format!("{} ({})", l.product.display_name(lang), l.quantity))
            .collect();
        let choice = Select::new()
            .with_prompt("Pick a line")
            .items(&items)
            .default(0)
            .interact()?;
        let line = &session.cart.lines[choice];
        let product_id = line.product.id.clone();
        let quantity: u32 = Input::new()
            .with_prompt("New quantity (0 removes)")
            .default(line.quantity)
            .interact_text()?;
        session.apply(SessionEvent::UpdateQuantity {
            product_id,
            quantity,
        });
    }

    session.apply(SessionEvent::CloseOverlay);
    Ok(())
}

/// Run the payment flow. Returns true when an order was placed, which
/// ends the session.
async fn checkout(session: &mut Session, policy: &DeliveryPolicy, ctx: &Context) -> Result<bool> {
    if session.cart.is_empty() {
        ctx.output.warn("Your cart is empty");
        return Ok(false);
    }

    session.apply(SessionEvent::OpenCart);
    session.apply(SessionEvent::BeginCheckout);

    let pricing = session.cart.pricing(policy);
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if pricing.free_delivery() {
        ctx.output.kv("Delivery", "FREE");
    } else {
        ctx.output.kv("Delivery", &pricing.delivery_fee.display());
    }
    ctx.output.kv("Total", &pricing.total.display_fixed());

    let choices = ["💳 Card", "📱 UPI", "👛 Cash on Delivery", "Back"];
    let choice = Select::new()
        .with_prompt("Payment method")
        .items(&choices)
        .default(1)
        .interact()?;

    let method = match choice {
        0 => {
            ctx.output.info("Using the demo card 4111 1111 1111 1111");
            PaymentMethod::card("4111 1111 1111 1111", "12/26", "123", "Demo Vendor")
        }
        1 => {
            let id: String = Input::new()
                .with_prompt("UPI ID")
                .default("vendor@paytm".to_string())
                .interact_text()?;
            PaymentMethod::upi(id)
        }
        2 => PaymentMethod::CashOnDelivery,
        _ => {
            session.apply(SessionEvent::CloseOverlay);
            return Ok(false);
        }
    };
    if let Err(err) = method.validate() {
        ctx.output.warn(&err.to_string());
        session.apply(SessionEvent::CloseOverlay);
        return Ok(false);
    }

    let confirmed = Confirm::new()
        .with_prompt(format!("Pay {} now?", pricing.total.display_fixed()))
        .default(true)
        .interact()?;
    if !confirmed {
        session.apply(SessionEvent::CloseOverlay);
        return Ok(false);
    }

    let gateway = ctx.config.gateway();
    let request = PaymentRequest::new(pricing.total, method);
    let spinner = ctx.output.spinner("Processing payment...");
    let receipt = match gateway.process(&request).await {
        Ok(receipt) => {
            spinner.finish_and_clear();
            receipt
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(e.into());
        }
    };

    // Snapshot before the success event clears the cart.
    let confirmation = super::checkout::build_confirmation(&session.cart, &receipt);
    session.apply(SessionEvent::PaymentSucceeded {
        receipt: receipt.clone(),
        confirmation: confirmation.clone(),
    });

    super::checkout::print_receipt(&receipt, ctx);
    super::checkout::print_confirmation(&confirmation, ctx);
    Ok(true)
}

fn switch_language(session: &mut Session, ctx: &Context) -> Result<()> {
    let items: Vec<&str> = Language::ALL.iter().map(|l| l.native_name()).collect();
    let current = Language::ALL
        .iter()
        .position(|l| *l == session.language)
        .unwrap_or(0);

    let choice = Select::new()
        .with_prompt("Language")
        .items(&items)
        .default(current)
        .interact()?;

    let lang = Language::ALL[choice];
    session.apply(SessionEvent::SetLanguage(lang));
    ctx.output
        .success(&format!("Language set to {}", lang.native_name()));
    Ok(())
}
