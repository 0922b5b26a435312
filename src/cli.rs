//! # fieldcheck CLI
//!
//! Checks a field manifest against the provider's field validators before
//! the values reach the remote API.
//!
//! ## Usage
//!
//! ```bash
//! # Check every field in a manifest (exits non-zero on any error)
//! fieldcheck check fields.yaml
//!
//! # Machine-readable report
//! fieldcheck check fields.json --format json
//!
//! # List the rule names a manifest may use
//! fieldcheck rules
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use field_validators::{FieldManifest, ManifestReport, RULE_NAMES};

/// Provider field validation CLI
#[derive(Parser)]
#[command(name = "fieldcheck")]
#[command(
    about = "Validate provider configuration fields",
    long_about = None,
    after_help = "\
Examples:
  fieldcheck check fields.yaml
  fieldcheck check fields.json --format json
  fieldcheck rules
"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check every field of a manifest
    Check {
        /// Manifest file (YAML, or JSON when the extension is .json)
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// List the rule names accepted in a manifest
    Rules,
    /// Print version and build information
    Version,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fieldcheck=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check { file, format } => check_command(file, format),
        Commands::Rules => {
            for name in RULE_NAMES {
                println!("{name}");
            }
            Ok(())
        }
        Commands::Version => {
            println!(
                "fieldcheck {} ({}, built {})",
                env!("CARGO_PKG_VERSION"),
                env!("BUILD_GIT_HASH"),
                env!("BUILD_DATETIME")
            );
            Ok(())
        }
    }
}

fn check_command(file: PathBuf, format: OutputFormat) -> Result<()> {
    let manifest = FieldManifest::load(&file)
        .with_context(|| format!("Failed to load manifest {}", file.display()))?;
    debug!(fields = manifest.fields.len(), "Loaded manifest");

    let report = manifest.evaluate();

    match format {
        OutputFormat::Text => print_text(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report.to_json())
                .context("Failed to serialize report")?;
            println!("{json}");
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "{} error(s) in {} of {} field(s)",
            report.error_count(),
            report.failures().count(),
            report.fields.len()
        ))
    }
}

fn print_text(report: &ManifestReport) {
    for field in &report.fields {
        if field.validation.is_valid() {
            println!("✓ {} ({})", field.key, field.rule);
            continue;
        }
        println!("✗ {} ({})", field.key, field.rule);
        for message in field.validation.messages() {
            println!("    {message}");
        }
    }
}
