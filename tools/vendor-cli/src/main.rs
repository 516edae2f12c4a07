//! VendorConnect CLI - the wholesale storefront demo in the terminal.
//!
//! - `vendor catalog` - Browse the product catalog
//! - `vendor pools` - List and join group-buying pools
//! - `vendor alerts` - Manage price alerts
//! - `vendor shop` - Shop interactively
//! - `vendor checkout` - Run a scripted checkout
//! - `vendor render` - Render the storefront pages to files
//! - `vendor config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::*;
use context::Context;
use output::Output;

#[derive(Parser)]
#[command(name = "vendor")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the product catalog
    Catalog(CatalogArgs),

    /// List and join group-buying pools
    Pools(PoolsArgs),

    /// Manage price alerts
    Alerts(AlertsArgs),

    /// Shop interactively
    Shop(ShopArgs),

    /// Run a scripted checkout against the simulated gateway
    Checkout(CheckoutArgs),

    /// Render the storefront pages to a directory
    Render(RenderArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    // Setup output formatting
    let output = Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = Context::load(cli.config.as_deref(), output)?;

    // Execute command
    let result = match cli.command {
        Commands::Catalog(args) => commands::catalog::run(args, &ctx).await,
        Commands::Pools(args) => commands::pools::run(args, &ctx).await,
        Commands::Alerts(args) => commands::alerts::run(args, &ctx).await,
        Commands::Shop(args) => commands::shop::run(args, &ctx).await,
        Commands::Checkout(args) => commands::checkout::run(args, &ctx).await,
        Commands::Render(args) => commands::render::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Logs go to stderr so they never mix with command output.
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
