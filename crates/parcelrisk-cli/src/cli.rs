//! CLI definition using clap

use clap::{Parser, Subcommand};
use parcelrisk_types::{ColorMode, OutputFormat};

#[derive(Debug, Parser)]
#[command(name = "parcelrisk")]
#[command(author = "yuuji")]
#[command(version)]
#[command(about = "Package damage risk predictor with a terminal dashboard")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (table, json, csv)
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// When to use colors
    #[arg(long, value_enum, global = true)]
    pub color: Option<ColorMode>,

    /// Match weather and truck labels ignoring case and surrounding whitespace
    #[arg(long, global = true)]
    pub normalize_labels: bool,

    /// Verbose logging to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Commands {
    /// Enter shipments interactively and show the risk dashboard (default)
    Assess,

    /// Show the weather and truck risk factors
    Factors,

    /// Show the effective configuration
    Config,
}
