use super::{
    parsing::parse_max_size,
    path_resolve::{resolve_input, ResolvedInput},
    validation::validate_docs_options,
    ToolConfig, WalkerSettings,
};
use crate::cli::{AnalyzeCli, DocsCli, MigrateCli};
use crate::discovery::DiscoveryOptions;
use crate::docs::DocOptions;
use crate::filtering::compile_exclude_globs;
use crate::migrate::MigrationMode;
use crate::patterns::PatternTable;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Runtime configuration of `migrate-colors`.
#[derive(Debug, Clone)]
pub struct MigrateConfig {
    pub input: ResolvedInput,
    pub tool: ToolConfig,
    pub table: PatternTable,
    pub discovery: DiscoveryOptions,
    pub mode: MigrationMode,
    /// Restricts the migration to one pattern category.
    pub category: Option<String>,
    pub export: Option<PathBuf>,
    pub verbose: bool,
}

impl TryFrom<MigrateCli> for MigrateConfig {
    type Error = anyhow::Error;

    fn try_from(cli: MigrateCli) -> Result<Self, Self::Error> {
        let tool = ToolConfig::load(cli.config.as_deref().map(Path::new))?;
        let table = tool.pattern_table()?;
        let discovery = discovery_options(&tool.walker, cli.max_size.as_deref())?;
        let input = resolve_input(&cli.input_path)?;

        Ok(Self {
            input,
            table,
            discovery,
            mode: if cli.dry_run {
                MigrationMode::DryRun
            } else {
                MigrationMode::Apply
            },
            category: cli.pattern,
            export: cli.export.map(PathBuf::from),
            verbose: cli.verbose,
            tool,
        })
    }
}

/// Runtime configuration of `analyze-components`.
#[derive(Debug, Clone)]
pub struct AnalyzeConfig {
    pub input: ResolvedInput,
    /// Loaded settings, with `--top` already applied.
    pub tool: ToolConfig,
    pub table: PatternTable,
    pub discovery: DiscoveryOptions,
    pub export: Option<PathBuf>,
}

impl TryFrom<AnalyzeCli> for AnalyzeConfig {
    type Error = anyhow::Error;

    fn try_from(cli: AnalyzeCli) -> Result<Self, Self::Error> {
        let mut tool = ToolConfig::load(cli.config.as_deref().map(Path::new))?;
        if let Some(top) = cli.top {
            tool.analyzer.top_candidates = top;
        }
        let table = tool.pattern_table()?;
        let discovery = discovery_options(&tool.walker, cli.max_size.as_deref())?;
        let input = resolve_input(&cli.input_path)?;

        Ok(Self {
            input,
            tool,
            table,
            discovery,
            export: cli.export.map(PathBuf::from),
        })
    }
}

/// Runtime configuration of `generate-docs`.
#[derive(Debug, Clone)]
pub struct DocsConfig {
    /// Component file, or the results file in batch mode.
    pub input: PathBuf,
    /// Report destination: `--output`, or the default under the docs directory.
    pub output: PathBuf,
    pub batch: bool,
    pub results: Option<PathBuf>,
    pub analysis: Option<PathBuf>,
    pub options: DocOptions,
    pub tool: ToolConfig,
    pub table: PatternTable,
}

impl TryFrom<DocsCli> for DocsConfig {
    type Error = anyhow::Error;

    fn try_from(cli: DocsCli) -> Result<Self, Self::Error> {
        validate_docs_options(&cli)?;
        let tool = ToolConfig::load(cli.config.as_deref().map(Path::new))?;
        let table = tool.pattern_table()?;
        let input = PathBuf::from(&cli.input_path);
        let output = match cli.output {
            Some(path) => PathBuf::from(path),
            None => default_docs_output(&tool.docs.output_dir, &input, cli.batch),
        };

        Ok(Self {
            options: DocOptions::today(cli.time, cli.method, cli.notes),
            input,
            output,
            batch: cli.batch,
            results: cli.results.map(PathBuf::from),
            analysis: cli.analysis.map(PathBuf::from),
            tool,
            table,
        })
    }
}

/// Builds walker options from settings, with the `--max-size` flag taking precedence.
fn discovery_options(
    walker: &WalkerSettings,
    cli_max_size: Option<&str>,
) -> Result<DiscoveryOptions> {
    let max_size = parse_max_size(cli_max_size.or(walker.max_size.as_deref()))?;
    Ok(DiscoveryOptions {
        extensions: walker
            .extensions
            .iter()
            .map(|e| e.trim().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect(),
        exclude_dirs: walker.exclude_dirs.clone(),
        exclude_globs: compile_exclude_globs(&walker.exclude_globs)?,
        max_size,
    })
}

/// `<dir>/<stem>-migration.md`, or `<dir>/<stem>-summary.md` for a batch.
fn default_docs_output(dir: &Path, input: &Path, batch: bool) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "report".to_string());
    let suffix = if batch { "summary" } else { "migration" };
    dir.join(format!("{}-{}.md", stem, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docs::Method;
    use clap::Parser;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_migrate_config_from_cli() -> Result<()> {
        let temp = tempdir()?;
        let dir = temp.path().to_str().unwrap();
        let cli = MigrateCli::parse_from(["migrate-colors", "-d", "-p", "text", "-m", "1k", dir]);
        let config = MigrateConfig::try_from(cli)?;
        assert_eq!(config.mode, MigrationMode::DryRun);
        assert_eq!(config.category.as_deref(), Some("text"));
        assert_eq!(config.discovery.max_size, Some(1000));
        assert!(config.discovery.extensions.contains(&"tsx".to_string()));
        assert!(!config.input.is_file);
        Ok(())
    }

    #[test]
    fn test_migrate_config_invalid_target() {
        let cli = MigrateCli::parse_from(["migrate-colors", "no/such/dir/for/tokenshift"]);
        let err = MigrateConfig::try_from(cli).unwrap_err();
        assert!(err.to_string().contains("Invalid target"));
    }

    #[test]
    fn test_analyze_config_top_and_config_file() -> Result<()> {
        let temp = tempdir()?;
        let config_path = temp.path().join("tokenshift.toml");
        fs::write(
            &config_path,
            "[walker]\nextensions = [\".TSX\"]\nmax_size = \"2k\"\n[analyzer]\ntop_candidates = 4\n",
        )?;
        let dir = temp.path().to_str().unwrap();
        let cli = AnalyzeCli::parse_from([
            "analyze-components",
            "--config",
            config_path.to_str().unwrap(),
            "--top",
            "7",
            dir,
        ]);
        let config = AnalyzeConfig::try_from(cli)?;
        assert_eq!(config.tool.analyzer.top_candidates, 7);
        assert_eq!(config.discovery.extensions, vec!["tsx".to_string()]);
        assert_eq!(config.discovery.max_size, Some(2000));
        Ok(())
    }

    #[test]
    fn test_docs_config_default_outputs() -> Result<()> {
        let single = DocsConfig::try_from(DocsCli::parse_from([
            "generate-docs",
            "components/ui/Button.tsx",
        ]))?;
        assert_eq!(
            single.output,
            PathBuf::from("docs/migrations/Button-migration.md")
        );
        assert_eq!(single.options.method, Method::Script);

        let batch = DocsConfig::try_from(DocsCli::parse_from([
            "generate-docs",
            "--batch",
            "-o",
            "out/report.md",
            "run/results.json",
        ]))?;
        assert_eq!(batch.output, PathBuf::from("out/report.md"));
        assert!(batch.batch);

        let batch_default = DocsConfig::try_from(DocsCli::parse_from([
            "generate-docs",
            "--batch",
            "run/results.json",
        ]))?;
        assert_eq!(
            batch_default.output,
            PathBuf::from("docs/migrations/results-summary.md")
        );
        Ok(())
    }
}
