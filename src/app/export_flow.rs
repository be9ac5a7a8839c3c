use crate::config::ExportConfig;
use crate::db::accessors::{DatabaseAccessor, DuckDbAccessor};
use crate::export::exporter::TableExporter;
use anyhow::Result;
use log::info;
use std::io::{self, Write};
use std::path::PathBuf;

/// How a successful run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    DryRun { tables: Vec<String> },
    Exported { files: Vec<PathBuf> },
}

/// Runs the export against stdout.
pub fn run_export(config: &ExportConfig) -> Result<RunOutcome> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_export_to(config, &mut out)
}

/// Orchestrates the export flow: open the database, list its tables, then export them
/// unless this is a dry run. User-facing progress goes to `out`.
///
/// The database handle lives for the duration of this call and is closed on every return path.
pub fn run_export_to<W: Write>(config: &ExportConfig, out: &mut W) -> Result<RunOutcome> {
    info!("Input database: {}", config.input.display());
    info!("Output directory: {}", config.output_dir.display());

    // 1. Open the database read-only (delegated to db::accessors)
    let accessor = DuckDbAccessor::open(&config.input)?;

    // 2. List tables
    let tables = accessor.list_tables()?;
    info!("Found {} table(s)", tables.len());
    writeln!(out, "Found database tables:")?;
    for table in &tables {
        writeln!(out, "  - {}", table)?;
    }

    if config.dry_run {
        writeln!(out, "Dry run - no output files were written")?;
        info!("Dry run, skipping export");
        return Ok(RunOutcome::DryRun { tables });
    }

    // 3. Export every table (delegated to export::exporter)
    let files = TableExporter.export_tables(&accessor, &tables, &config.output_dir, out)?;
    info!("Exported {} file(s)", files.len());
    Ok(RunOutcome::Exported { files })
}
