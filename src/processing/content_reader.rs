// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Error, Result};
use std::{fs, path::Path};

/// Reads the entire content of a source file as UTF-8 text.
///
/// # Errors
/// `Error::Io` if the file cannot be read, `Error::NonUtf8` if its bytes are
/// not valid UTF-8.
pub fn read_source(path: &Path) -> Result<String> {
    let bytes = fs::read(path).map_err(|e| io_error_with_path(e, path))?;
    String::from_utf8(bytes).map_err(|_| Error::NonUtf8 {
        path: path.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_read_valid_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("Card.tsx");
        let content = "export const Card = () => <div className=\"bg-white\" />;";
        fs::write(&file_path, content)?;

        assert_eq!(read_source(&file_path)?, content);

        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_read_non_existent_file() {
        let path = Path::new("non_existent_file_for_tokenshift_test.tsx");
        let err = read_source(path).unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("non_existent_file"));
    }

    #[test]
    fn test_read_non_utf8_file() -> anyhow::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("binary.tsx");
        fs::write(&file_path, [0x80, 0x81, 0x82])?;

        let err = read_source(&file_path).unwrap_err();
        assert!(matches!(err, Error::NonUtf8 { .. }));

        temp.close()?;
        Ok(())
    }
}
