// db/accessors.rs
// Database accessor for the embedded DuckDB engine.

use super::models::ExportJob;
use anyhow::{Context, Result};
use duckdb::{AccessMode, Config, Connection};
use log::debug;
use std::path::Path;

pub trait DatabaseAccessor {
    /// Table names in the default schema, in the order the engine returns them.
    fn list_tables(&self) -> Result<Vec<String>>;

    /// Writes one table to its destination file, replacing any existing file.
    fn export_table(&self, job: &ExportJob) -> Result<()>;
}

// ------------------- DuckDB -------------------
/// Read-only session on a DuckDB file. The connection closes when the accessor is dropped.
pub struct DuckDbAccessor {
    conn: Connection,
}

impl DuckDbAccessor {
    pub fn open(path: &Path) -> Result<Self> {
        let config = Config::default()
            .access_mode(AccessMode::ReadOnly)
            .context("Failed to configure read-only access")?;
        let conn = Connection::open_with_flags(path, config)
            .with_context(|| format!("Failed to open DuckDB database {}", path.display()))?;
        conn.query_row("SELECT 1", [], |row| row.get::<_, i32>(0))
            .context("Cannot connect to database")?;
        debug!("Opened {} read-only", path.display());
        Ok(Self { conn })
    }
}

impl DatabaseAccessor for DuckDbAccessor {
    fn list_tables(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SHOW TABLES")
            .context("Failed to query database tables")?;
        let rows = stmt
            .query_map([], |row| row.get::<_, String>(0))
            .context("Failed to query database tables")?;
        let tables = rows
            .collect::<duckdb::Result<Vec<String>>>()
            .context("Failed to read table name")?;
        Ok(tables)
    }

    fn export_table(&self, job: &ExportJob) -> Result<()> {
        let statement = job.copy_statement();
        debug!("Executing: {}", statement);
        self.conn.execute_batch(&statement)?;
        Ok(())
    }
}
