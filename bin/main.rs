//! Tareas CLI Entry Point
//!
//! Interactive task manager on stdin / stdout. Logs go to stderr, filtered by `RUST_LOG`.

use std::process;

use tareas_interface::{run_console, ConsoleConfig};
use tracing_subscriber::EnvFilter;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("starting console");
    run_console(ConsoleConfig::default())?;
    Ok(())
}
