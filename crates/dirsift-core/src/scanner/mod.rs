/// Scanner module: filter-driven recursive directory scanning.
///
/// A scan walks a directory subtree through a `DirectoryLister`, applies the
/// include/exclude filters and the ignore-token pruning rule, and returns a
/// lexicographically sorted flat list of matching file paths. Directories
/// below the root that cannot be listed do not abort the scan; they are
/// collected in `ScanReport::errors`.
pub mod filter;
pub mod lister;
pub mod memory;
pub mod stats;

mod recursive;

pub use filter::ScanFilter;
pub use lister::{DirEntryInfo, DirectoryLister, LocalLister};
pub use memory::MemoryLister;
pub use stats::ScanStats;

use crate::config::ScanOptions;
use crate::error::{ScanError, ScanErrorKind};
use chrono::{DateTime, Utc};
use recursive::Walker;
use serde::Serialize;
use std::time::Instant;
use tracing::info;

/// A directory below the root that was not scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirError {
    pub path: String,
    pub kind: ScanErrorKind,
    pub message: String,
}

impl From<ScanError> for DirError {
    fn from(err: ScanError) -> Self {
        Self {
            path: err.path().to_string(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

/// Outcome of a completed scan.
#[derive(Debug, Clone, Serialize)]
pub struct ScanReport {
    /// The root as it prefixes every reported path.
    pub root: String,
    pub scanned_at: DateTime<Utc>,
    /// Matching file paths, sorted lexicographically.
    pub files: Vec<String>,
    /// Subdirectories that could not be scanned, in discovery order.
    pub errors: Vec<DirError>,
    pub stats: ScanStats,
}

/// Scan `root` on the local filesystem with `filter`.
pub fn scan(root: &str, filter: &ScanFilter) -> Result<ScanReport, ScanError> {
    scan_with(&LocalLister::new(), root, &ScanOptions::new(filter.clone()))
}

/// Scan `root` through `lister`.
///
/// Fails only when the root itself cannot be listed. Backslashes in `root`
/// are normalized to `/` and a trailing separator is dropped, so reported
/// paths always read `root/sub/name`.
pub fn scan_with<L: DirectoryLister + ?Sized>(
    lister: &L,
    root: &str,
    options: &ScanOptions,
) -> Result<ScanReport, ScanError> {
    let start = Instant::now();
    let (prefix, list_path) = normalize_root(root);

    let entries = lister
        .list_entries(&list_path)
        .map_err(|err| ScanError::from_io(list_path.clone(), err))?;

    let mut walker = Walker::new(lister, options);
    walker.walk_root(&prefix, &list_path, entries);

    let mut files = walker.files;
    files.sort();

    info!(
        "Scan of {list_path} complete: {} files, {} dirs, {} errors in {:?}",
        files.len(),
        walker.stats.dirs_visited,
        walker.errors.len(),
        start.elapsed()
    );

    Ok(ScanReport {
        root: prefix,
        scanned_at: Utc::now(),
        files,
        errors: walker.errors,
        stats: walker.stats,
    })
}

/// Split a user-supplied root into the prefix used to build reported paths
/// and the path handed to the lister.
fn normalize_root(root: &str) -> (String, String) {
    let normalized = root.replace('\\', "/");
    let prefix = normalized.trim_end_matches('/').to_string();
    let list_path = if prefix.is_empty() && !normalized.is_empty() {
        "/".to_string()
    } else {
        prefix.clone()
    };
    (prefix, list_path)
}
