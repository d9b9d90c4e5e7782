//! Vitrine CLI
//!
//! Inspect the style catalogs, resolve style tokens and edit a persisted
//! storefront snapshot without the visual editor.

mod commands;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use vitrine_app::EditorConfig;

/// Storefront theming and page composition
#[derive(Parser, Debug)]
#[command(name = "vitrine")]
#[command(about = "Storefront theming and page composition")]
#[command(version)]
struct Cli {
    /// Configuration file or directory containing vitrine.toml
    #[arg(short, long, global = true, default_value = "vitrine.toml")]
    config: PathBuf,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List color palettes
    Palettes {
        #[arg(long)]
        json: bool,
    },

    /// List font pairings
    Fonts {
        #[arg(long)]
        json: bool,
    },

    /// List the custom block library
    Blocks {
        #[arg(long)]
        json: bool,
    },

    /// Resolve a style selection into tokens
    Resolve {
        #[arg(long, default_value = "minimal")]
        palette: String,
        #[arg(long, default_value = "inter")]
        font: String,
        #[arg(long, default_value = "rounded")]
        button_shape: String,
        /// Print CSS custom properties instead of JSON
        #[arg(long)]
        css: bool,
    },

    /// Write a default vitrine.toml and an initial snapshot
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Print the storefront's sections in page order
    Show {
        /// Render visible sections with the published tokens
        #[arg(long)]
        preview: bool,
        #[arg(long)]
        json: bool,
    },

    /// Move the section at FROM so it lands at TO
    Reorder { from: usize, to: usize },

    /// Show or hide a section
    Toggle {
        id: String,
        /// Explicit visibility; flips the current value when omitted
        #[arg(long)]
        visible: Option<bool>,
    },

    /// Append a custom block
    AddBlock {
        /// Block kind, e.g. marquee or image-banner
        kind: String,
        #[arg(long, default_value = "")]
        title: String,
    },

    /// Remove a custom block
    RemoveBlock { id: String },

    /// Change the storefront's palette, font or button shape
    SetStyle {
        #[arg(long)]
        palette: Option<String>,
        #[arg(long)]
        font: Option<String>,
        #[arg(long)]
        button_shape: Option<String>,
    },

    /// Print the storefront's tokens as a CSS rule
    Css {
        #[arg(long, default_value = ":root")]
        selector: String,
    },
}

fn init_logging(config: &EditorConfig, verbose: u8) {
    let default_level = match verbose {
        0 => config.log.level.as_str(),
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = EditorConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    init_logging(&config, cli.verbose);

    tracing::debug!(store = %config.store.path.display(), "vitrine starting");

    let mut stdout = std::io::stdout().lock();
    commands::run(cli.command, &cli.config, &config, &mut stdout)
}
