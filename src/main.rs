use anyhow::Result;
use clap::Parser;
use riskmap::cli::{Cli, Commands};
use riskmap::config::RiskmapConfig;
use riskmap::io::{create_writer, OutputFormat};
use riskmap::pipeline::{analyze, AnalysisInput};
use riskmap::providers::{load_coverage_artifact, load_function_metrics, load_smell_predictions};
use std::fs::File;
use std::path::PathBuf;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Analyze {
            metrics,
            predictions,
            coverage,
            config,
            format,
            output,
            top,
        } => run_analyze(metrics, predictions, coverage, config, format, output, top),
    }
}

fn run_analyze(
    metrics: PathBuf,
    predictions: PathBuf,
    coverage: PathBuf,
    config: Option<PathBuf>,
    format: OutputFormat,
    output: Option<PathBuf>,
    top: Option<usize>,
) -> Result<()> {
    // Configuration errors are the only fail-fast class; nothing is loaded
    // before the config is known to be valid.
    let config = RiskmapConfig::load(config.as_deref())?;

    let input = AnalysisInput {
        functions: load_function_metrics(&metrics)?,
        predictions: load_smell_predictions(&predictions)?,
        coverage: load_coverage_artifact(&coverage)?,
    };

    let report = analyze(input, &config);

    let mut writer = match output {
        Some(path) => create_writer(format, File::create(path)?, top),
        None => create_writer(format, std::io::stdout(), top),
    };
    writer.write_report(&report)?;

    Ok(())
}
