use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Warehouse Move - handheld scanner flow for moving inventory between locators
#[derive(Parser, Debug)]
#[command(name = "warehouse-move")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Run in interactive scanner mode
    #[arg(short, long)]
    pub interactive: bool,

    /// Inventory fixture (TOML) to use instead of the built-in one
    #[arg(long, global = true)]
    pub fixture: Option<PathBuf>,

    /// User recorded on move transactions
    #[arg(long, global = true)]
    pub operator: Option<String>,

    /// Display language (en, vi)
    #[arg(long, global = true)]
    pub lang: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List locators and their metadata
    Locators,

    /// Show the inventory held at a locator
    Inventory {
        /// Locator code
        locator: String,
    },

    /// Classify a destination code as pallet, occupied, free or invalid
    Classify {
        /// Scanned destination code
        code: String,

        /// Source locator of the move
        #[arg(short, long)]
        source: String,
    },

    /// Run a complete move without prompts
    Move {
        /// Source locator
        #[arg(short, long)]
        source: String,

        /// Stage everything at the source
        #[arg(long)]
        pick_all: bool,

        /// Scanned codes (pallet, SKU or serial), in order
        #[arg(long = "scan", value_name = "CODE")]
        scans: Vec<String>,

        /// Batch quantities as ID=QTY
        #[arg(long = "batch", value_name = "ID=QTY", value_parser = parse_batch)]
        batches: Vec<(String, u32)>,

        /// Destination locator or pallet
        #[arg(short, long)]
        destination: String,

        /// Print the transaction as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show or update saved settings
    Config {
        /// Save the display language
        #[arg(long = "set-language")]
        language: Option<String>,

        /// Save the operator
        #[arg(long = "set-operator")]
        operator: Option<String>,

        /// Save the fixture path
        #[arg(long = "set-fixture")]
        fixture: Option<PathBuf>,
    },
}

/// Parse `ID=QTY`
pub fn parse_batch(value: &str) -> Result<(String, u32), String> {
    let (id, quantity) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got {}", value))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing batch id in {}", value));
    }

    let quantity = quantity
        .trim()
        .parse::<u32>()
        .map_err(|_| format!("invalid quantity in {}", value))?;

    Ok((id.to_string(), quantity))
}
