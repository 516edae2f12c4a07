use std::fs;

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::Context;

pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.info("");
    ctx.output.info("[store]");
    ctx.output.kv("name", &ctx.config.store.name);
    ctx.output.kv("language", &ctx.config.store.language);

    ctx.output.info("");
    ctx.output.info("[delivery]");
    ctx.output.kv("fee_rupees", &ctx.config.delivery.fee_rupees.to_string());
    ctx.output.kv(
        "free_threshold_rupees",
        &ctx.config.delivery.free_threshold_rupees.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[payment]");
    ctx.output.kv(
        "processing_delay_ms",
        &ctx.config.payment.processing_delay_ms.to_string(),
    );

    ctx.output.info("");
    ctx.output.info("[connectivity]");
    ctx.output.kv(
        "interval_secs",
        &ctx.config.connectivity.interval_secs.to_string(),
    );
    ctx.output.kv(
        "offline_probability",
        &ctx.config.connectivity.offline_probability.to_string(),
    );

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join("vendor.toml");

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    let config = generate_default_config(&ctx.config.store.name);
    fs::write(&config_path, config)?;

    ctx.output
        .success(&format!("Created: {}", config_path.display()));
    Ok(())
}
