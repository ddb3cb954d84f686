//! Command-line interface for seed_palette
//!
//! Takes seed colors as arguments and prints the derived palette as JSON.
//! Logs go to stderr so the output can be piped.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder;
use log::{debug, LevelFilter};

use seed_palette::{derive_palette_with_config, ColorValue, EmptySeedPolicy, EngineConfig};

/// Derive a named, accessibility-rated palette from dominant image colors
#[derive(Parser, Debug)]
#[command(name = "seed-palette", version, about, long_about = None)]
struct Args {
    /// Seed colors as hex (#3366cc) or r,g,b triples (51,102,204)
    #[arg(value_name = "COLOR", value_parser = parse_seed)]
    seeds: Vec<ColorValue>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Derive mid-gray neutrals instead of failing when no seeds are given
    #[arg(long)]
    allow_empty: bool,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Log level: error, warn, info, debug, trace
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn parse_seed(s: &str) -> std::result::Result<ColorValue, String> {
    s.parse().map_err(|e: seed_palette::PaletteError| e.to_string())
}

fn main() -> Result<()> {
    let args = Args::parse();

    Builder::new()
        .filter_level(args.log_level)
        .parse_default_env()
        .format_timestamp(None)
        .init();

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_file(path)
            .with_context(|| format!("Loading configuration from {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.allow_empty {
        config.empty_seeds = EmptySeedPolicy::MidGray;
    }
    debug!("Using configuration {:?}", config);

    let result = derive_palette_with_config(&args.seeds, &config).map_err(|e| {
        let hint = e.user_message();
        anyhow::Error::new(e).context(hint)
    })?;

    let json = if args.compact {
        serde_json::to_string(&result)?
    } else {
        serde_json::to_string_pretty(&result)?
    };

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{}", json).context("Writing palette to stdout")?;
    Ok(())
}
