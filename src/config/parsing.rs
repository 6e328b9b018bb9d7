// src/config/parsing.rs

use super::ToolConfig;
use anyhow::{Context, Result};
use byte_unit::Byte;
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// Parses the optional max size string into Option<u128>.
pub fn parse_max_size(max_size_str: Option<&str>) -> Result<Option<u128>> {
    max_size_str
        .map(|s| {
            Byte::from_str(s)
                .map(|b| b.as_u128())
                .with_context(|| format!("Invalid size format: '{}'", s))
        })
        .transpose()
}

/// Reads a TOML config file. Sections the file omits keep their defaults.
pub(super) fn read_config_file(path: &Path) -> Result<ToolConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
    let config: ToolConfig = toml::from_str(&raw)
        .with_context(|| format!("Invalid config file '{}'", path.display()))?;
    log::debug!("Loaded configuration from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_valid_max_size() -> Result<()> {
        // Use 1000 for 'k' (SI prefix)
        assert_eq!(parse_max_size(Some("10k"))?, Some(10 * 1000));
        // Use 1024*1024 for 'MiB' (Binary prefix)
        assert_eq!(parse_max_size(Some("2MiB"))?, Some(2 * 1024 * 1024));
        // Plain number is bytes
        assert_eq!(parse_max_size(Some("1024"))?, Some(1024));
        assert_eq!(parse_max_size(None)?, None);
        Ok(())
    }

    #[test]
    fn test_parse_invalid_max_size() {
        let result = parse_max_size(Some("invalid"));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid size format"));
    }

    #[test]
    fn test_read_config_file() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("tokenshift.toml");
        fs::write(
            &path,
            "[walker]\nextensions = [\"vue\"]\n\n[docs]\nmanual_baseline_minutes = 45.0\n",
        )?;
        let config = read_config_file(&path)?;
        assert_eq!(config.walker.extensions, vec!["vue".to_string()]);
        assert_eq!(config.docs.manual_baseline_minutes, 45.0);
        Ok(())
    }

    #[test]
    fn test_read_config_file_invalid_toml() -> Result<()> {
        let temp = tempdir()?;
        let path = temp.path().join("broken.toml");
        fs::write(&path, "[walker\n")?;
        let err = read_config_file(&path).unwrap_err();
        assert!(err.to_string().contains("Invalid config file"));
        Ok(())
    }
}
