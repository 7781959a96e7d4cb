//! # groceries CLI
//!
//! Command-line interface for the groceries list manager.
//!
//! Copyright (c) 2025 Dominic Rodemer. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;

use groceries::{
    commands::{self, AddArgs, ListOptions},
    logging, Config,
};

const GLOBAL_HELP: &str = "\
Configuration File:
  ~/.config/groceries/config   Optional defaults (source, format, category, log_level)

Getting Started:
  groc -s list.json add Milk 2              Add two Milk to the default category
  groc -s list.json -c dairy add Cheese 1   Add to a specific category
  groc -s list.json list                    Show the list grouped by category
  groc -s list.json remove milk             Remove Milk from every category
  groc -s list.csv -f csv list              Use a CSV file instead of JSON

Logging:
  Set RUST_LOG (e.g. RUST_LOG=info) to see what the list manager is doing.";

#[derive(Parser)]
#[command(name = "groc")]
#[command(author = "Dominic Rodemer")]
#[command(version)]
#[command(about = "Scriptable grocery list manager backed by JSON or CSV files")]
#[command(after_help = GLOBAL_HELP)]
struct Cli {
    /// Grocery list file
    #[arg(short, long, global = true)]
    source: Option<PathBuf>,

    /// Storage format: json or csv
    #[arg(short, long, global = true)]
    format: Option<String>,

    /// Category for added items
    #[arg(short, long, global = true)]
    category: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a quantity of an item
    #[command(
        long_about = "Add a quantity of an item to the list.\n\n\
If an item with the same name (ignoring case) already exists in the same category, \
the quantities are summed. Otherwise a new entry is appended.",
        after_help = "Examples:\n  \
groc -s list.json add Milk 2\n  \
groc -s list.json -c fruit add Apple 6"
    )]
    Add {
        /// Name of the item
        name: String,

        /// Quantity to add
        #[arg(allow_hyphen_values = true)]
        quantity: String,
    },

    /// List items grouped by category
    List,

    /// Remove an item from every category
    #[command(
        long_about = "Remove every item with the given name, ignoring case and category.\n\n\
Removing a name that is not on the list is not an error."
    )]
    Remove {
        /// Name of the item
        name: String,
    },

    /// Show date, operating system and version
    Info,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // info touches no files, so a broken config must not stop it
    let config = match cli.command {
        Commands::Info => Config::default(),
        _ => Config::load()?,
    };
    logging::init(config.log_level());

    let options = ListOptions {
        source: cli.source,
        format: cli.format,
        category: cli.category,
    };

    match cli.command {
        Commands::Add { name, quantity } => commands::add(
            &config,
            &AddArgs {
                options,
                name,
                quantity,
            },
        ),

        Commands::List => commands::list(&config, &options),

        Commands::Remove { name } => commands::remove(&config, &options, &name),

        Commands::Info => commands::info(),
    }
}
