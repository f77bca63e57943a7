#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use advitya_core::LandingConfig;
use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Resolved landing config, set once from the command line
static LANDING_CONFIG: OnceLock<LandingConfig> = OnceLock::new();

/// Get the landing config (set from command line or default)
pub fn get_landing_config() -> LandingConfig {
    LANDING_CONFIG.get().cloned().unwrap_or_default()
}

/// Advitya - festival landing page
#[derive(Parser, Debug)]
#[command(name = "advitya-desktop")]
#[command(about = "Advitya festival landing page")]
struct Args {
    /// JSON config file (overlay timing, counter format, grid layout)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override how long the splash overlay stays up (ms)
    #[arg(long)]
    display_duration_ms: Option<u64>,

    /// Start with the splash overlay dismissed
    #[arg(long)]
    skip_intro: bool,

    /// Print the resolved config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Debug-level logging (RUST_LOG still takes precedence)
    #[arg(short, long)]
    verbose: bool,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 420.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 860.0)]
    height: f64,
}

/// Merge the config file (if any) with command line overrides.
fn resolve_config(args: &Args) -> anyhow::Result<LandingConfig> {
    let mut config = match &args.config {
        Some(path) => LandingConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => LandingConfig::default(),
    };

    if let Some(ms) = args.display_duration_ms {
        config.overlay.display_duration_ms = ms;
    }
    if args.skip_intro {
        config.skip_intro = true;
    }

    config.validate().context("Invalid landing config")?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    advitya_core::logging::init(args.verbose);

    let config = resolve_config(&args)?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    tracing::info!(
        display_duration_ms = config.overlay.display_duration_ms,
        target = config.counter.target_value,
        columns = config.grid.columns,
        skip_intro = config.skip_intro,
        "Starting Advitya landing"
    );

    let _ = LANDING_CONFIG.set(config);

    // Configure desktop window (phone-shaped by default)
    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Advitya")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
