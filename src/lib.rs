// Library surface for the DuckDB table exporter; the binary in main.rs is a thin wrapper.

pub mod app;
pub mod config;
pub mod db;
pub mod export;

pub use app::export_flow::{run_export, run_export_to, RunOutcome};
pub use config::{Args, ExportConfig};
