// src/main.rs
use clap::Parser;
use duckdb_exporter::app::logging::init_logger;
use duckdb_exporter::{run_export, Args, ExportConfig};
use log::{error, log_enabled, Level};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logger(args.log_level) {
        eprintln!("{:#}", e);
        return ExitCode::FAILURE;
    }

    let result = ExportConfig::resolve(&args).and_then(|config| run_export(&config));
    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            // The diagnostic is printed even with --log-level off.
            if log_enabled!(Level::Error) {
                error!("{:#}", e);
            } else {
                eprintln!("Error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}
