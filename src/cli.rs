//! CLI interface for the career matcher

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "career-matcher")]
#[command(about = "Match a personal profile against a catalog of career paths")]
#[command(long_about = "Score a profile against every career in a catalog and report the best matches with skill gaps, suggested next steps and an estimated time to readiness")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank careers for a profile
    Match {
        /// Path to profile file (JSON, TOML)
        #[arg(short, long)]
        profile: PathBuf,

        /// Career catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Output format: console, json, markdown
        #[arg(short, long)]
        output: Option<String>,

        /// Save output to file
        #[arg(short, long)]
        save: Option<PathBuf>,

        /// Number of recommendations to return
        #[arg(short, long)]
        top: Option<usize>,

        /// Include the full action plan and factor breakdown
        #[arg(short, long)]
        detailed: bool,

        /// Clamp composite scores to [0, 1]
        #[arg(long)]
        clamp: bool,
    },

    /// Inspect the career catalog
    Catalog {
        /// Career catalog file to use instead of the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,

        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Show or change configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum CatalogAction {
    /// List all careers
    List,

    /// Show one career in full
    Show {
        /// Career id, e.g. "data-scientist"
        id: String,
    },

    /// Show the suggested skills, industries, environments and values
    Vocabulary,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "matching.top_n" or "matching.weights")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(OutputFormat::Console),
        "json" => Ok(OutputFormat::Json),
        "markdown" | "md" => Ok(OutputFormat::Markdown),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown",
            format
        )),
    }
}

/// Validate file extension
pub fn validate_file_extension(path: &Path, allowed_extensions: &[&str]) -> Result<(), String> {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => {
            if allowed_extensions.contains(&ext.to_lowercase().as_str()) {
                Ok(())
            } else {
                Err(format!(
                    "Unsupported file extension: .{}. Allowed: {}",
                    ext,
                    allowed_extensions.join(", ")
                ))
            }
        }
        None => Err("File has no extension".to_string()),
    }
}
