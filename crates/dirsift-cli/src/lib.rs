/// dirsift CLI: argument parsing and command execution.
///
/// This crate contains all front-end code. Logic lives in `dirsift-core`.
pub mod cli;
pub mod commands;

pub use cli::Cli;
pub use commands::run;
