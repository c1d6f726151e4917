#![allow(non_snake_case)]

mod app;
mod components;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use mdclist_core::{ChildElement, ChildTag, ItemContent, ListFixture, Meta};

/// List shown by the app, set from the command line
static FIXTURE: OnceLock<ListFixture> = OnceLock::new();
static TITLE: OnceLock<String> = OnceLock::new();

/// The list to show (loaded from `--items` or the built-in sample)
pub fn fixture() -> ListFixture {
    FIXTURE.get().cloned().unwrap_or_else(sample_fixture)
}

pub fn window_title() -> String {
    TITLE.get().cloned().unwrap_or_else(|| "Material List".to_string())
}

/// Material List - list controller demo
#[derive(Parser, Debug)]
#[command(name = "mdclist-desktop")]
#[command(about = "Material List - interactive list item demo")]
struct Args {
    /// JSON fixture with the list items to show
    #[arg(short, long)]
    items: Option<PathBuf>,

    /// Window title
    #[arg(short, long)]
    title: Option<String>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn sample_fixture() -> ListFixture {
    ListFixture {
        class_name: "mdc-list--two-line".to_string(),
        items: vec![
            ItemContent::new("Inbox")
                .with_secondary_text("3 unread conversations")
                .with_graphic(ChildElement::icon("inbox"))
                .with_meta("3"),
            ItemContent::new("Starred")
                .with_secondary_text("Focusable graphic")
                .with_children_tab_index(0)
                .with_graphic(ChildElement::icon("star").with_tab_index(0)),
            ItemContent::new("Documentation")
                .with_secondary_text("Opens a link")
                .with_graphic(ChildElement::icon("description"))
                .with_meta(Meta::Element(
                    ChildElement::icon("open_in_new").with_attribute("aria-hidden", "true"),
                ))
                .with_attribute("href", "https://m2.material.io/components/lists"),
            ItemContent::new("Single line item").with_graphic(
                ChildElement::new(ChildTag::Span).with_class("material-icons").with_text("label"),
            ),
        ],
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    setup_logging(args.verbose);

    let fixture = match &args.items {
        Some(path) => ListFixture::load(path)
            .with_context(|| format!("Failed to load items from {}", path.display()))?,
        None => sample_fixture(),
    };
    tracing::info!("Starting with {} list items", fixture.items.len());

    let title = args.title.unwrap_or_else(|| "Material List".to_string());
    let _ = FIXTURE.set(fixture);
    let _ = TITLE.set(title.clone());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(600.0, 720.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(config).launch(app::App);

    Ok(())
}
