//! Water Log CLI
//!
//! Daily water usage logging with baseline and week-over-week comparisons.

mod cli;
mod commands;
mod config;
mod input;
mod models;
mod reporting;
mod storage;

use tracing_subscriber::EnvFilter;


/// Environment variable holding the log filter.
const LOG_ENV: &str = "WLOG_LOG";


fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}


fn main() {
    init_logging();

    if let Err(e) = cli::run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
