// src/bin/analyze_components.rs

use anyhow::Result;
use clap::Parser;
use tokenshift::cli::AnalyzeCli;
use tokenshift::config::AnalyzeConfig;
use tokenshift::{logging, progress, run_analyze};

fn main() -> Result<()> {
    let cli = AnalyzeCli::parse();
    logging::init(cli.verbose);

    log::info!("Starting analyze-components v{}...", env!("CARGO_PKG_VERSION"));

    let config = match AnalyzeConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };

    let reporter = progress::stderr_reporter();
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    if let Err(e) = run_analyze(&config, reporter.as_deref(), &mut writer) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    Ok(())
}
