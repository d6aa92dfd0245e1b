//! Cart CLI - inspect and edit the persisted marketplace cart.
//!
//! Commands:
//! - `cart list` - Show the cart contents
//! - `cart add` - Add a product (or bump its quantity)
//! - `cart inc` - Increment a product's quantity
//! - `cart dec` - Decrement a product's quantity, removing it at zero
//! - `cart reset` - Delete the persisted cart
//! - `cart config` - Manage configuration

mod commands;
mod config;
mod context;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::{AddArgs, ConfigArgs, ListArgs, QuantityArgs, ResetArgs};
use config::{LogConfig, LogFormat};

/// Cart CLI - inspect and edit the persisted marketplace cart
#[derive(Parser)]
#[command(name = "cart")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Storage directory (overrides the config file)
    #[arg(long, global = true)]
    store: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the cart contents
    List(ListArgs),

    /// Add a product to the cart
    Add(AddArgs),

    /// Increment a product's quantity
    Inc(QuantityArgs),

    /// Decrement a product's quantity
    Dec(QuantityArgs),

    /// Delete the persisted cart
    Reset(ResetArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup output formatting
    let output = output::Output::new(cli.verbose, cli.json);

    // Load config
    let ctx = match context::Context::load(cli.config.as_deref(), output.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            output.error(&format!("{:#}", e));
            std::process::exit(1);
        }
    };
    let ctx = match cli.store.as_deref() {
        Some(dir) => ctx.with_storage_dir(dir),
        None => ctx,
    };

    init_tracing(&ctx.config.log, cli.verbose);

    // Execute command
    let result = match cli.command {
        Commands::List(args) => commands::list::run(args, &ctx).await,
        Commands::Add(args) => commands::edit::add(args, &ctx).await,
        Commands::Inc(args) => commands::edit::increment(args, &ctx).await,
        Commands::Dec(args) => commands::edit::decrement(args, &ctx).await,
        Commands::Reset(args) => commands::reset::run(args, &ctx).await,
        Commands::Config(args) => commands::config::run(args, &ctx).await,
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured filter; `--verbose` raises the
/// library crates to debug.
fn init_tracing(config: &LogConfig, verbose: bool) {
    let default_filter = if verbose {
        "marketplace_cart=debug,marketplace_kv=debug".to_string()
    } else {
        config.filter.clone()
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    let json = config.format == LogFormat::Json;
    let json_layer = json.then(|| {
        tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_writer(std::io::stderr)
    });
    let text_layer = (!json).then(|| tracing_subscriber::fmt::layer().with_writer(std::io::stderr));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(json_layer)
        .with(text_layer)
        .init();
}
