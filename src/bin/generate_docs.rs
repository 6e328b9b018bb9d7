// src/bin/generate_docs.rs

use anyhow::Result;
use clap::Parser;
use tokenshift::cli::DocsCli;
use tokenshift::config::DocsConfig;
use tokenshift::{logging, run_docs};

fn main() -> Result<()> {
    let cli = DocsCli::parse();
    logging::init(cli.verbose);

    log::info!("Starting generate-docs v{}...", env!("CARGO_PKG_VERSION"));

    let result = DocsConfig::try_from(cli).and_then(|config| run_docs(&config));
    match result {
        Ok(path) => {
            println!("Documentation written to {}", path.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
