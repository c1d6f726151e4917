//! Material List CLI
//!
//! Thin wrapper around mdclist-core for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Render a fixture to HTML on stdout
//! mdclist render items.json
//!
//! # Render into a file
//! mdclist render items.json -o list.html
//!
//! # Report contract warnings per item
//! mdclist check items.json
//!
//! # Show the root class a class name produces
//! mdclist classes "mdc-list-item--activated custom"
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mdclist_core::{list_item_classes, ListFixture};

/// Material List - static rendering of Material Design lists
#[derive(Parser)]
#[command(name = "mdclist")]
#[command(version = "0.1.0")]
#[command(about = "Material List - render and check list item fixtures")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON fixture to HTML
    Render {
        /// Fixture file
        fixture: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print contract warnings for every item in a fixture
    Check {
        /// Fixture file
        fixture: PathBuf,
    },

    /// Print the root class list produced for a class name
    Classes {
        /// Extra classes, as passed to a list item
        #[arg(default_value = "")]
        class_name: String,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn load(path: &PathBuf) -> Result<ListFixture> {
    ListFixture::load(path).with_context(|| format!("Failed to load fixture {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    match cli.command {
        Commands::Render { fixture, output } => {
            let list = load(&fixture)?;
            let html = list.to_node().to_html();
            tracing::info!("Rendered {} items", list.items.len());

            match output {
                Some(path) => {
                    std::fs::write(&path, format!("{html}\n"))
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    println!("Wrote {} items to {}", list.items.len(), path.display());
                }
                None => println!("{html}"),
            }
        }

        Commands::Check { fixture } => {
            let list = load(&fixture)?;
            let mut total = 0;
            for (index, item) in list.items.iter().enumerate() {
                for warning in item.warnings() {
                    total += 1;
                    println!("item {index} ({}): {warning}", item.primary_text);
                }
            }
            if total == 0 {
                println!("{} items, no warnings", list.items.len());
            } else {
                println!("{} items, {total} warnings", list.items.len());
            }
        }

        Commands::Classes { class_name } => {
            println!("{}", list_item_classes(&class_name));
        }
    }

    Ok(())
}
