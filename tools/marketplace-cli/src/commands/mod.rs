//! CLI command implementations.

pub mod config;
pub mod edit;
pub mod list;
pub mod reset;

use clap::{Args, Subcommand};
use rust_decimal::Decimal;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    /// Only print the total number of units.
    #[arg(long)]
    pub count: bool,
}

/// Arguments for the add command.
#[derive(Args)]
pub struct AddArgs {
    /// Product identifier.
    #[arg(long)]
    pub id: String,

    /// Product title.
    #[arg(long)]
    pub title: String,

    /// Product image URL.
    #[arg(long)]
    pub image_url: String,

    /// Unit price (decimal, e.g. 49.90).
    #[arg(long)]
    pub price: Decimal,
}

/// Arguments for the increment and decrement commands.
#[derive(Args)]
pub struct QuantityArgs {
    /// Product identifier.
    pub id: String,
}

/// Arguments for the reset command.
#[derive(Args)]
pub struct ResetArgs {
    /// Skip confirmation prompt.
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Print the path of the config file in use.
    Path,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}
