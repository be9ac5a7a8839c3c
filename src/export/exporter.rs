// export/exporter.rs
// Handles exporting database tables to CSV files

use crate::db::accessors::DatabaseAccessor;
use crate::db::models::ExportJob;
use anyhow::{Context, Result};
use log::info;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct TableExporter;

impl TableExporter {
    /// Exports `tables` in order, one file each, stopping at the first failure.
    ///
    /// A progress line is written to `out` before each table. Returns the files written.
    pub fn export_tables<W: Write>(
        &self,
        accessor: &dyn DatabaseAccessor,
        tables: &[String],
        output_dir: &Path,
        out: &mut W,
    ) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(tables.len());
        for table in tables {
            let job = ExportJob::for_table(output_dir, table)
                .with_context(|| format!("Failed to export table {}", table))?;
            writeln!(out, "Exporting table {} to {}", job.table, job.destination.display())?;

            accessor
                .export_table(&job)
                .with_context(|| format!("Failed to export table {}", table))?;
            info!("Exported {} to {}", job.table, job.destination.display());
            written.push(job.destination);
        }
        Ok(written)
    }
}
