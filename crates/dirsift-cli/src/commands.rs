/// Command execution.
///
/// Every command renders its output to a `String` so the binary only has to
/// print it, and tests can assert on it directly.
use crate::cli::{Cli, Command, OutputFormat, PadArgs, ReplaceArgs, ScanArgs, SplitArgs};
use anyhow::{Context, Result};
use dirsift_core::model::{serialize, DirTree};
use dirsift_core::scanner::{scan_with, LocalLister, ScanReport};
use dirsift_core::text::{pad, replace, split};
use dirsift_core::ScanOptions;
use tracing::warn;

/// Run the parsed command line and return what should be printed.
pub fn run(cli: &Cli) -> Result<String> {
    match &cli.command {
        Command::Scan(args) => run_scan(args),
        Command::Split(args) => run_split(args),
        Command::Replace(args) => Ok(run_replace(args)),
        Command::Pad(args) => Ok(run_pad(args)),
    }
}

/// Merge the optional config file with the command-line overrides.
pub fn scan_options(args: &ScanArgs) -> Result<ScanOptions> {
    let mut options = match &args.config {
        Some(path) => ScanOptions::from_json_file(path)
            .with_context(|| format!("loading scan config {}", path.display()))?,
        None => ScanOptions::default(),
    };
    if let Some(include) = &args.include {
        options.filter.include_filter = include.clone();
    }
    if let Some(exclude) = &args.exclude {
        options.filter.exclude_filter = exclude.clone();
    }
    if let Some(token) = &args.ignore_token {
        options.filter.dir_ignore_token = token.clone();
    }
    if args.max_depth.is_some() {
        options.max_depth = args.max_depth;
    }
    Ok(options)
}

fn run_scan(args: &ScanArgs) -> Result<String> {
    let options = scan_options(args)?;
    let report = scan_with(&LocalLister::new(), &args.root, &options)
        .with_context(|| format!("scanning {}", args.root))?;

    for err in &report.errors {
        warn!("{}: {}", err.path, err.message);
    }

    match args.format {
        OutputFormat::Lines => Ok(lines(&report.files)),
        OutputFormat::Json => {
            let mut json =
                serde_json::to_string_pretty(&report).context("serializing scan report")?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Csv => to_csv(&report),
        OutputFormat::Tree => Ok(serialize(&DirTree::from_paths(&report.root, &report.files))),
    }
}

fn to_csv(report: &ScanReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["kind", "path", "detail"])?;
    for file in &report.files {
        writer.write_record(["file", file.as_str(), ""])?;
    }
    for err in &report.errors {
        writer.write_record(["error", err.path.as_str(), err.kind.label()])?;
    }
    let bytes = writer.into_inner().context("flushing CSV output")?;
    String::from_utf8(bytes).context("CSV output is not UTF-8")
}

fn run_split(args: &SplitArgs) -> Result<String> {
    let tokens = split(&args.input, &args.delimiter, args.max_parts)
        .with_context(|| format!("splitting on {:?}", args.delimiter))?;
    Ok(lines(&tokens))
}

fn run_replace(args: &ReplaceArgs) -> String {
    let mut out = replace(
        &args.search,
        &args.replacement,
        &args.subject,
        args.max,
        args.max_pos,
    );
    out.push('\n');
    out
}

fn run_pad(args: &PadArgs) -> String {
    let mut out = pad(
        &args.input,
        &args.fill,
        args.length,
        args.pad_side.into(),
        args.overflow_side.into(),
    );
    out.push('\n');
    out
}

fn lines<S: AsRef<str>>(items: &[S]) -> String {
    let mut out = String::new();
    for item in items {
        out.push_str(item.as_ref());
        out.push('\n');
    }
    out
}
