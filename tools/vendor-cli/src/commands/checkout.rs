//! Scripted checkout against the simulated gateway.
//!
//! Seeds a cart, validates a payment method from flags, and runs the
//! charge end to end. Without `--item` the cart is filled from the
//! canned voice order.

use anyhow::{anyhow, bail, Result};
use dialoguer::Confirm;
use vendor_commerce::cart::Cart;
use vendor_commerce::checkout::{
    cod_surcharge, generate_order_number, OrderConfirmation, OrderedItem, PaymentGateway,
    PaymentMethod, PaymentReceipt, PaymentRequest, SUPPORT_EMAIL, SUPPORT_PHONE,
};
use vendor_commerce::session::VoiceOrder;
use wholesale_storefront::StorefrontData;

use super::CheckoutArgs;
use crate::context::Context;
use crate::output::status_badge;

pub async fn run(args: CheckoutArgs, ctx: &Context) -> Result<()> {
    let data = StorefrontData::seed(chrono::Utc::now());
    let policy = ctx.config.delivery_policy();

    // Step 1: Fill the cart
    ctx.output.step(1, 4, "Filling the cart");
    let cart = seed_cart(&args.item, &data)?;
    for line in &cart.lines {
        ctx.output.list_item(&format!(
            "{} × {} {} = {}",
            line.quantity,
            line.product.name.en,
            line.product.unit,
            line.line_total().display()
        ));
    }
    let pricing = cart.pricing(&policy);
    ctx.output.kv("Subtotal", &pricing.subtotal.display());
    if pricing.free_delivery() {
        ctx.output.kv("Delivery", "FREE");
    } else {
        ctx.output.kv("Delivery", &pricing.delivery_fee.display());
    }
    ctx.output.kv("Total", &pricing.total.display_fixed());

    // Step 2: Pick the payment method
    ctx.output.step(2, 4, "Picking the payment method");
    let method = method_from_args(&args)?;
    ctx.output.kv("Method", method.label());
    if let PaymentMethod::Upi { id } = &method {
        ctx.output.kv("UPI ID", id);
    }

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Pay {} now?", pricing.total.display_fixed()))
            .default(true)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Checkout cancelled");
            return Ok(());
        }
    }

    // Step 3: Process the payment
    ctx.output.step(3, 4, "Processing payment");
    let gateway = ctx.config.gateway();
    ctx.output.debug(&format!(
        "gateway delay: {}ms",
        gateway.processing_delay().as_millis()
    ));
    let request = PaymentRequest::new(pricing.total, method);
    let spinner = ctx.output.spinner("Contacting payment gateway...");
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

    // Step 4: Print the confirmation
    ctx.output.step(4, 4, "Done!");
    let confirmation = build_confirmation(&cart, &receipt);

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "receipt": receipt,
            "confirmation": confirmation,
        }));
        return Ok(());
    }

    print_receipt(&receipt, ctx);
    print_confirmation(&confirmation, ctx);

    Ok(())
}

/// Build a cart from `<product-id>:<quantity>` specs, or from the canned
/// voice order when none are given.
fn seed_cart(items: &[String], data: &StorefrontData) -> Result<Cart> {
    let mut cart = Cart::new();

    if items.is_empty() {
        for (product, quantity) in VoiceOrder::canned().resolve(&data.products) {
            cart.add_qty(product, quantity)?;
        }
        return Ok(cart);
    }

    for spec in items {
        let (id, quantity) = spec
            .split_once(':')
            .ok_or_else(|| anyhow!("Invalid item spec '{}' (expected <product-id>:<quantity>)", spec))?;
        let quantity: u32 = quantity
            .parse()
            .map_err(|_| anyhow!("Invalid quantity in '{}'", spec))?;
        let product = data
            .products
            .iter()
            .find(|p| p.id.as_str() == id)
            .ok_or_else(|| anyhow!("No product with id '{}'", id))?;
        cart.add_qty(product, quantity)?;
    }

    Ok(cart)
}

fn method_from_args(args: &CheckoutArgs) -> Result<PaymentMethod> {
    let method = match args.method.to_lowercase().as_str() {
        "card" => PaymentMethod::card(&args.card_number, &args.expiry, &args.cvv, &args.holder),
        "upi" => PaymentMethod::upi(&args.upi_id),
        "cod" => PaymentMethod::CashOnDelivery,
        other => bail!("Unknown payment method: {} (expected card, upi, or cod)", other),
    };
    method.validate()?;
    Ok(method)
}

/// Snapshot the cart into an order confirmation, shared with the shop.
pub fn build_confirmation(cart: &Cart, receipt: &PaymentReceipt) -> OrderConfirmation {
    let items = cart
        .lines
        .iter()
        .map(|line| OrderedItem {
            name: line.product.name.en.clone(),
            name_hi: line.product.name.hi.clone(),
            quantity: line.quantity,
            unit_price: line.product.price,
            unit: line.product.unit.clone(),
        })
        .collect();

    OrderConfirmation::new(
        generate_order_number(&mut rand::thread_rng()),
        receipt.amount,
        receipt.paid_at,
        items,
    )
}

pub fn print_receipt(receipt: &PaymentReceipt, ctx: &Context) {
    ctx.output.success("Payment successful!");
    ctx.output.kv("Payment ID", receipt.payment_id.as_str());
    ctx.output.kv("Method", &receipt.method);
    ctx.output.kv("Amount", &receipt.amount.display_fixed());
    ctx.output.kv(
        "Paid at",
        &receipt.paid_at.format("%d/%m/%Y %H:%M UTC").to_string(),
    );
    if receipt.method == "cod" {
        ctx.output.info(&format!(
            "Pay with cash when your order is delivered. {} additional charge applies.",
            cod_surcharge().display()
        ));
    }
}

pub fn print_confirmation(confirmation: &OrderConfirmation, ctx: &Context) {
    ctx.output.info("");
    ctx.output.header(&format!("Order {}", confirmation.order_number));
    ctx.output.kv("Status", &status_badge(confirmation.status_label()));
    ctx.output.kv("Total", &confirmation.amount.display_fixed());
    ctx.output.kv("Estimated delivery", &confirmation.estimated_delivery_label());
    ctx.output.info("");

    for item in &confirmation.items {
        ctx.output.list_item(&format!(
            "{} × {} {} = {}",
            item.quantity,
            item.name,
            item.unit,
            item.line_total().display()
        ));
    }
    ctx.output.info("");

    for milestone in confirmation.timeline() {
        ctx.output.kv(milestone.label, milestone.eta);
    }
    ctx.output.info("");

    ctx.output.kv("Support", SUPPORT_PHONE);
    ctx.output.kv("Email", SUPPORT_EMAIL);
}
