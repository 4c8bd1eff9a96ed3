use crate::io::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "riskmap")]
#[command(
    about = "Function-level test risk analyzer combining code smell predictions with runtime coverage",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rank functions by testing risk and emit recommendations
    Analyze {
        /// Function metrics file (JSON) from the metrics extractor
        #[arg(long)]
        metrics: PathBuf,

        /// Smell predictions file (JSON) from model inference
        #[arg(long)]
        predictions: PathBuf,

        /// Coverage report (JSON) from one instrumented test run
        #[arg(long)]
        coverage: PathBuf,

        /// Configuration file (defaults to riskmap.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,

        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Show only top N priority items
        #[arg(long = "top", visible_alias = "head")]
        top: Option<usize>,
    },
}
