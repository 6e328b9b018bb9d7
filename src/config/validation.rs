// src/config/validation.rs

use crate::cli::DocsCli;
use anyhow::{anyhow, Result};

/// Validates combinations of documentation options that clap cannot easily express.
pub(super) fn validate_docs_options(cli: &DocsCli) -> Result<()> {
    if let Some(minutes) = cli.time {
        if !minutes.is_finite() || minutes < 0.0 {
            return Err(anyhow!("--time must be a non-negative number of minutes"));
        }
    }
    if cli.batch && (cli.results.is_some() || cli.analysis.is_some()) {
        return Err(anyhow!(
            "--results and --analysis apply to single-file reports; in --batch mode the input is the results file"
        ));
    }
    Ok(())
}
