pub mod export_flow;
pub mod logging;
