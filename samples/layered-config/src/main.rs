//! layered-config
//!
//! Resolves the service configuration from layer files and prints it.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin layered-config -- \
//!   --layer config/base.yaml --layer config/production.json
//!
//! # Fail unless the layers alone define every field
//! cargo run --bin layered-config -- --require-complete \
//!   --layer config/full.yaml
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use layered_config_sample::layer::{Resolution, load_and_resolve};

#[derive(Parser, Debug)]
#[command(name = "layered-config")]
#[command(about = "Resolve a service configuration from layer files")]
struct Cli {
    /// Layer file; later layers override earlier ones
    #[arg(long = "layer", value_name = "PATH")]
    layers: Vec<PathBuf>,

    /// Output format for the resolved configuration
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Require the layers to define every field instead of using defaults
    #[arg(long)]
    require_complete: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Json,
    Yaml,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "layered_config=info,layered_config_sample=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let resolution = if cli.require_complete {
        Resolution::RequireComplete
    } else {
        Resolution::OverDefaults
    };

    let config =
        load_and_resolve(&cli.layers, resolution).context("Failed to resolve configuration")?;

    let rendered = match cli.format {
        OutputFormat::Json => {
            serde_json::to_string_pretty(&config).context("Failed to render JSON")?
        }
        OutputFormat::Yaml => serde_yaml::to_string(&config).context("Failed to render YAML")?,
    };
    println!("{rendered}");

    Ok(())
}
