//! Price alert management.
//!
//! Alerts operate on the seeded demo list, so changes live for one
//! invocation. The ids printed by `list` are the ids the other
//! subcommands accept.

use anyhow::{anyhow, Result};
use chrono::Utc;
use dialoguer::Confirm;
use vendor_commerce::alerts::{AlertCenter, AlertChannel, AlertDirection};
use vendor_commerce::{AlertId, Money};
use wholesale_storefront::StorefrontData;

use super::{AlertsArgs, AlertsCommand};
use crate::context::Context;
use crate::output::status_badge;

const ALERT_WIDTHS: [usize; 7] = [14, 18, 9, 9, 7, 14, 10];

pub async fn run(args: AlertsArgs, ctx: &Context) -> Result<()> {
    let data = StorefrontData::seed(Utc::now());
    let mut center = data.alerts;

    match args.command {
        Some(AlertsCommand::List) | None => {
            list_alerts(&center, ctx);
            Ok(())
        }
        Some(AlertsCommand::Add {
            product,
            target,
            direction,
            channel,
        }) => add_alert(&mut center, &product, target, &direction, &channel, ctx),
        Some(AlertsCommand::Toggle { id }) => toggle_alert(&mut center, &id, ctx),
        Some(AlertsCommand::Remove { id, yes }) => remove_alert(&mut center, &id, yes, ctx),
        Some(AlertsCommand::Test) => {
            ctx.output.success(center.send_test_alert());
            Ok(())
        }
    }
}

fn list_alerts(center: &AlertCenter, ctx: &Context) {
    if ctx.output.is_json() {
        ctx.output.json(center);
        return;
    }

    ctx.output.header("Price Alerts");
    ctx.output.kv(
        "Active",
        &format!("{}/{}", center.active_count(), center.alerts.len()),
    );
    ctx.output.info("");

    ctx.output.table_row(
        &["ID", "PRODUCT", "CURRENT", "TARGET", "WHEN", "NOTIFY VIA", "STATUS"],
        &ALERT_WIDTHS,
    );
    ctx.output.info(&"-".repeat(80));

    for alert in &center.alerts {
        let current = alert.current_price.display();
        let target = alert.target_price.display();
        let status = if alert.is_active {
            status_badge("active")
        } else {
            status_badge("paused")
        };

        ctx.output.table_row(
            &[
                alert.id.as_str(),
                &alert.product_name,
                &current,
                &target,
                alert.direction.label(),
                alert.channel.label(),
                &status,
            ],
            &ALERT_WIDTHS,
        );
    }

    ctx.output.info("");
    ctx.output.header("Notification Settings");
    ctx.output.kv("Phone", &center.settings.phone);
    if center.settings.daily_updates {
        ctx.output.list_item("Daily price updates");
    }
    if center.settings.price_drops {
        ctx.output.list_item("Price drop alerts");
    }
    if center.settings.new_deals {
        ctx.output.list_item("New deal notifications");
    }
    if center.settings.weekly_report {
        ctx.output.list_item("Weekly market report");
    }
}

fn add_alert(
    center: &mut AlertCenter,
    product: &str,
    target: i64,
    direction: &str,
    channel: &str,
    ctx: &Context,
) -> Result<()> {
    let direction = AlertDirection::from_str(direction)
        .ok_or_else(|| anyhow!("Unknown direction: {} (expected below or above)", direction))?;
    let channel = AlertChannel::from_str(channel)
        .ok_or_else(|| anyhow!("Unknown channel: {} (expected whatsapp, sms, or both)", channel))?;

    let id = center.create(
        product,
        Money::from_rupees(target),
        direction,
        channel,
        &mut rand::thread_rng(),
    )?;
    let alert = center
        .get(&id)
        .ok_or_else(|| anyhow!("alert vanished after creation"))?;

    ctx.output.success(&format!("Alert created for {}", alert.product_name));
    ctx.output.kv("ID", alert.id.as_str());
    ctx.output.kv("Current price", &alert.current_price.display());
    ctx.output.kv(
        "Fires",
        &format!(
            "{} {}",
            alert.direction.as_str(),
            alert.target_price.display()
        ),
    );
    ctx.output.kv("Notify via", alert.channel.label());

    if ctx.output.is_json() {
        ctx.output.json(alert);
    }

    Ok(())
}

fn toggle_alert(center: &mut AlertCenter, id: &str, ctx: &Context) -> Result<()> {
    let active = center.toggle(&AlertId::new(id))?;
    if active {
        ctx.output.success(&format!("Alert {} resumed", id));
    } else {
        ctx.output.success(&format!("Alert {} paused", id));
    }
    Ok(())
}

fn remove_alert(center: &mut AlertCenter, id: &str, yes: bool, ctx: &Context) -> Result<()> {
    let alert_id = AlertId::new(id);
    let name = center
        .get(&alert_id)
        .map(|a| a.product_name.clone())
        .ok_or_else(|| anyhow!("No alert with id '{}'", id))?;

    if !yes {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove the alert for {}?", name))
            .default(false)
            .interact()?;
        if !confirmed {
            ctx.output.warn("Not removed");
            return Ok(());
        }
    }

    center.remove(&alert_id)?;
    ctx.output.success(&format!("Removed alert for {}", name));
    Ok(())
}
