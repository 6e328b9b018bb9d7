// src/bin/migrate_colors.rs

use anyhow::Result;
use clap::Parser;
use tokenshift::cli::MigrateCli;
use tokenshift::config::MigrateConfig;
use tokenshift::{logging, progress, run_migrate};

fn main() -> Result<()> {
    let cli = MigrateCli::parse();
    logging::init(cli.verbose);

    log::info!("Starting migrate-colors v{}...", env!("CARGO_PKG_VERSION"));
    log::debug!("Raw arguments: {:?}", std::env::args().collect::<Vec<_>>());

    let config = match MigrateConfig::try_from(cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    };
    log::debug!("Configuration built successfully.");

    let reporter = progress::stderr_reporter();
    let stdout = std::io::stdout();
    let mut writer = stdout.lock();

    match run_migrate(&config, reporter.as_deref(), &mut writer) {
        Ok(summary) if summary.has_failures() => std::process::exit(1),
        Ok(_) => Ok(()),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
