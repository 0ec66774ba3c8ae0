//! dirsift: filter-driven directory scanner and string tools.
//!
//! Thin binary entry point. All logic lives in the `dirsift-core`
//! and `dirsift-cli` crates.

use clap::Parser;
use std::io::Write;

fn main() -> anyhow::Result<()> {
    let cli = dirsift_cli::Cli::parse();

    // Logs go to stderr so stdout stays clean for command output.
    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        })
        .with_writer(std::io::stderr)
        .init();

    let output = dirsift_cli::run(&cli)?;
    std::io::stdout().lock().write_all(output.as_bytes())?;
    Ok(())
}
