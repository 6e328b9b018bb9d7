// src/filtering/exclusion.rs

use anyhow::{Context, Result};
use glob::Pattern;
use std::path::Path;

/// Compiles file-name exclusion globs such as `*.test.*`.
pub fn compile_exclude_globs(globs: &[String]) -> Result<Vec<Pattern>> {
    globs
        .iter()
        .map(|g| Pattern::new(g).with_context(|| format!("Invalid exclude glob: '{}'", g)))
        .collect()
}

/// Checks whether the file name (basename) matches any exclusion glob.
pub fn is_excluded_name(path: &Path, globs: &[Pattern]) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .map(|name| globs.iter().any(|g| g.matches(name)))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_style_globs() -> Result<()> {
        let globs = compile_exclude_globs(&[
            "*.test.*".to_string(),
            "*.spec.*".to_string(),
            "*.d.ts".to_string(),
        ])?;
        assert!(is_excluded_name(&PathBuf::from("ui/Button.test.tsx"), &globs));
        assert!(is_excluded_name(&PathBuf::from("lib/api.spec.ts"), &globs));
        assert!(is_excluded_name(&PathBuf::from("types/env.d.ts"), &globs));
        assert!(!is_excluded_name(&PathBuf::from("ui/Button.tsx"), &globs));
        assert!(!is_excluded_name(&PathBuf::from("ui/testing.tsx"), &globs));
        Ok(())
    }

    #[test]
    fn test_invalid_glob() {
        let err = compile_exclude_globs(&["[".to_string()]).unwrap_err();
        assert!(err.to_string().contains("Invalid exclude glob"));
    }
}
