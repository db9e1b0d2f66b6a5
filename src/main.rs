//! echo-scaffold CLI entrypoint
//! Parses command-line arguments and runs one generation pass.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use echo_scaffold::{Config, generate};
use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "echo-scaffold")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Name of the API definition file
    #[arg(long, default_value = "api.json")]
    file: PathBuf,
    /// Name of the app module used in generated import paths
    #[arg(long, default_value = "app")]
    name: String,
    /// Directory that receives the bindings and handlers directories
    #[arg(long, default_value = ".")]
    output_dir: PathBuf,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config::new(cli.file, cli.name).with_output_dir(cli.output_dir)
    }
}

fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO, overridable through RUST_LOG
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    let config: Config = Cli::parse().into();

    let summary = generate(&config)
        .map_err(|e| {
            error!("Generation failed: {}", e);
            e
        })
        .with_context(|| {
            format!(
                "Failed to generate scaffolding from {}",
                config.schema_path.display()
            )
        })?;

    info!(
        endpoints = summary.endpoints,
        written = summary.written.len(),
        kept = summary.kept.len(),
        "Generation complete"
    );
    Ok(())
}
