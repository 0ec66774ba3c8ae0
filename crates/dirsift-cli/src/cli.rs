/// Command-line interface definition using clap's derive macros.
use clap::{Args, Parser, Subcommand, ValueEnum};
use dirsift_core::text::Side;
use std::path::PathBuf;

/// Filter-driven directory scanner and escape-aware string tools.
#[derive(Parser, Debug)]
#[command(name = "dirsift")]
#[command(version)]
pub struct Cli {
    /// Log at DEBUG level instead of INFO.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recursively list files below a directory.
    Scan(ScanArgs),

    /// Split a string on a delimiter, one token per line.
    Split(SplitArgs),

    /// Bounded find/replace.
    Replace(ReplaceArgs),

    /// Pad or truncate a string to a fixed width.
    Pad(PadArgs),
}

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory to scan.
    pub root: String,

    /// Only report files whose name contains this substring.
    #[arg(long)]
    pub include: Option<String>,

    /// Space-separated substrings; matching entries are skipped.
    #[arg(long)]
    pub exclude: Option<String>,

    /// Skip any directory that contains a file with this name.
    #[arg(long)]
    pub ignore_token: Option<String>,

    /// Deepest directory level to enter (the root is level 0).
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// JSON file with scan options; flags override its values.
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// One path per line.
    Lines,
    /// The full scan report as JSON.
    Json,
    /// `kind,path,detail` rows for files and errors.
    Csv,
    /// Level-first tree listing of the matched files.
    Tree,
}

#[derive(Args, Debug)]
pub struct SplitArgs {
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    #[arg(allow_hyphen_values = true)]
    pub delimiter: String,

    /// Stop after this many tokens (0 = no limit).
    #[arg(long, default_value_t = 0)]
    pub max_parts: usize,
}

#[derive(Args, Debug)]
pub struct ReplaceArgs {
    pub search: String,

    pub replacement: String,

    pub subject: String,

    /// Apply at most this many replacements (0 = no limit).
    #[arg(long, default_value_t = 0)]
    pub max: usize,

    /// Ignore matches that start after this character index.
    #[arg(long)]
    pub max_pos: Option<usize>,
}

#[derive(Args, Debug)]
pub struct PadArgs {
    #[arg(allow_hyphen_values = true)]
    pub input: String,

    #[arg(allow_hyphen_values = true)]
    pub fill: String,

    pub length: usize,

    #[arg(long, value_enum, default_value_t = SideArg::Right)]
    pub pad_side: SideArg,

    /// Which end survives truncation: `left` keeps the tail.
    #[arg(long, value_enum, default_value_t = SideArg::Right)]
    pub overflow_side: SideArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum SideArg {
    Left,
    Right,
}

impl From<SideArg> for Side {
    fn from(side: SideArg) -> Self {
        match side {
            SideArg::Left => Side::Left,
            SideArg::Right => Side::Right,
        }
    }
}
