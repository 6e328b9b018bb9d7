// src/filtering/size.rs

use std::fs::Metadata;

/// Checks if the file's size is within the optional limit.
#[inline]
pub fn passes_size_filter(metadata: &Metadata, max_size: Option<u128>) -> bool {
    match max_size {
        Some(max_size) => (metadata.len() as u128) <= max_size,
        None => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_size_no_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("file.tsx");
        fs::write(&file_path, "12345")?;
        let metadata = fs::metadata(&file_path)?;
        assert!(passes_size_filter(&metadata, None));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_size_within_and_over_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let file_path = temp.path().join("file.tsx");
        fs::write(&file_path, "1234567890")?; // 10 bytes
        let metadata = fs::metadata(&file_path)?;
        assert!(passes_size_filter(&metadata, Some(10)));
        assert!(!passes_size_filter(&metadata, Some(9)));
        temp.close()?;
        Ok(())
    }

    #[test]
    fn test_size_zero_limit() -> std::io::Result<()> {
        let temp = tempdir()?;
        let empty = temp.path().join("empty.ts");
        fs::write(&empty, "")?;
        assert!(passes_size_filter(&fs::metadata(&empty)?, Some(0)));

        let nonempty = temp.path().join("nonempty.ts");
        fs::write(&nonempty, "a")?;
        assert!(!passes_size_filter(&fs::metadata(&nonempty)?, Some(0)));
        temp.close()?;
        Ok(())
    }
}
