//! verbump - CLI entry point.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verbump::{BumpLevel, bump_manifest};

/// Manifest edited by the CLI, relative to the working directory.
const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Bump the semantic version in Cargo.toml.
#[derive(Parser, Debug)]
#[command(name = "verbump")]
#[command(about = "Bump the semantic version in Cargo.toml")]
struct Cli {
    /// Which version component to bump
    #[arg(value_enum)]
    bump_level: BumpLevel,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    bump_manifest(Path::new(DEFAULT_MANIFEST), cli.bump_level)
        .with_context(|| format!("Failed to bump version in {}", DEFAULT_MANIFEST))?;

    Ok(())
}
