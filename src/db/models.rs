// db/models.rs
// Export jobs and the quoting rules used to turn them into COPY statements

use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};

pub const EXPORT_EXTENSION: &str = "csv";

/// One table paired with the file it will be written to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportJob {
    pub table: String,
    pub destination: PathBuf,
}

impl ExportJob {
    /// Builds the job for `table`, placing `<table>.csv` directly inside `output_dir`.
    ///
    /// Names that would escape `output_dir` or cannot form a file name are rejected.
    pub fn for_table(output_dir: &Path, table: &str) -> Result<Self> {
        validate_table_name(table)?;
        let destination = output_dir.join(format!("{}.{}", table, EXPORT_EXTENSION));
        Ok(Self {
            table: table.to_string(),
            destination,
        })
    }

    /// The engine command writing the whole table with a header row, comma separated.
    pub fn copy_statement(&self) -> String {
        format!(
            "COPY {} TO {} (HEADER, DELIMITER ',')",
            quote_identifier(&self.table),
            quote_literal(&self.destination.to_string_lossy())
        )
    }
}

fn validate_table_name(table: &str) -> Result<()> {
    if table.is_empty() || table == "." || table == ".." {
        return Err(anyhow!("Table name '{}' cannot be used as a file name", table));
    }
    if table.contains(['/', '\\', '\0']) {
        return Err(anyhow!(
            "Table name '{}' contains a path separator or NUL character",
            table
        ));
    }
    Ok(())
}

pub fn quote_identifier(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

pub fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''"))
}
