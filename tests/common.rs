// tests/common.rs

use std::fs;
use std::path::Path;
use std::process::Command;

#[allow(dead_code)]
pub fn migrate_colors_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("migrate-colors"))
}

#[allow(dead_code)]
pub fn analyze_components_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("analyze-components"))
}

#[allow(dead_code)]
pub fn generate_docs_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("generate-docs"))
}

/// Writes `content` to `dir/relative_path`, creating parent directories.
#[allow(dead_code)]
pub fn create_file(
    dir: &Path,
    relative_path: &str,
    content: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let file_path = dir.join(relative_path);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(())
}
