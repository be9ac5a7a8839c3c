// config.rs
// Command-line arguments and the resolved settings derived from them

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Export every table of a DuckDB database to CSV files", long_about = None)]
pub struct Args {
    /// Input database file
    #[arg(long)]
    pub input: Option<PathBuf>,
    /// Output directory
    #[arg(long, default_value = ".")]
    pub output: PathBuf,
    /// Print tables but do not write output
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,
    /// Log level written to stderr (overrides RUST_LOG)
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// Absolute, validated paths for one run.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub dry_run: bool,
}

impl ExportConfig {
    /// Resolves both paths to absolute form and checks that the output directory exists.
    ///
    /// The input file is not touched here; opening it is the database's job.
    pub fn resolve(args: &Args) -> Result<Self> {
        let input = args
            .input
            .as_deref()
            .filter(|p| !p.as_os_str().is_empty())
            .ok_or_else(|| anyhow!("Missing --input"))?;
        let input = std::path::absolute(input)
            .with_context(|| format!("Cannot resolve input path {}", input.display()))?;
        let output_dir = std::path::absolute(&args.output)
            .with_context(|| format!("Cannot resolve output path {}", args.output.display()))?;
        validate_output_dir(&output_dir)?;

        Ok(Self {
            input,
            output_dir,
            dry_run: args.dry_run,
        })
    }
}

fn validate_output_dir(path: &Path) -> Result<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        _ => Err(anyhow!(
            "Output directory {} does not exist or is not a directory",
            path.display()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(input: Option<&str>, output: &Path, dry_run: bool) -> Args {
        Args {
            input: input.map(PathBuf::from),
            output: output.to_path_buf(),
            dry_run,
            log_level: LevelFilter::Warn,
        }
    }

    #[test]
    fn test_parse_defaults() {
        let parsed = Args::try_parse_from(["DuckDbExporter", "--input", "db.duckdb"]).unwrap();
        assert_eq!(parsed.input, Some(PathBuf::from("db.duckdb")));
        assert_eq!(parsed.output, PathBuf::from("."));
        assert!(!parsed.dry_run);
        assert_eq!(parsed.log_level, LevelFilter::Warn);
    }

    #[test]
    fn test_parse_all_flags() {
        let parsed = Args::try_parse_from([
            "DuckDbExporter",
            "--input",
            "db.duckdb",
            "--output",
            "/tmp/out",
            "--dry-run",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(parsed.output, PathBuf::from("/tmp/out"));
        assert!(parsed.dry_run);
        assert_eq!(parsed.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_resolve_makes_paths_absolute() {
        let dir = tempdir().unwrap();
        let config = ExportConfig::resolve(&args(Some("relative.duckdb"), dir.path(), true)).unwrap();
        assert!(config.input.is_absolute());
        assert!(config.input.ends_with("relative.duckdb"));
        assert_eq!(config.output_dir, dir.path());
        assert!(config.dry_run);
    }

    #[test]
    fn test_resolve_rejects_missing_input() {
        let dir = tempdir().unwrap();
        let err = ExportConfig::resolve(&args(None, dir.path(), false)).unwrap_err();
        assert!(err.to_string().contains("Missing --input"));
        assert!(ExportConfig::resolve(&args(Some(""), dir.path(), false)).is_err());
    }

    #[test]
    fn test_resolve_rejects_missing_output_dir() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");
        let err = ExportConfig::resolve(&args(Some("db.duckdb"), &missing, false)).unwrap_err();
        assert!(err.to_string().contains("does not exist or is not a directory"));
    }

    #[test]
    fn test_resolve_rejects_output_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "not a directory").unwrap();
        assert!(ExportConfig::resolve(&args(Some("db.duckdb"), &file, false)).is_err());
    }
}
