/// Depth-first, single-threaded directory walker.
///
/// One `Walker` lives for one scan. Results, errors and counters accumulate
/// in it while each directory level is listed through the `DirectoryLister`;
/// sorting happens once, after the walk.
use super::filter::ScanFilter;
use super::lister::{DirEntryInfo, DirectoryLister};
use super::stats::ScanStats;
use super::DirError;
use crate::config::ScanOptions;
use crate::error::{ScanError, ScanErrorKind};
use std::path::PathBuf;
use tracing::{debug, warn};

pub(crate) struct Walker<'a, L: DirectoryLister + ?Sized> {
    lister: &'a L,
    filter: &'a ScanFilter,
    exclude_terms: Vec<&'a str>,
    max_depth: Option<usize>,
    /// Canonical keys of the directories currently being walked.
    ancestors: Vec<PathBuf>,
    pub(crate) files: Vec<String>,
    pub(crate) errors: Vec<DirError>,
    pub(crate) stats: ScanStats,
}

impl<'a, L: DirectoryLister + ?Sized> Walker<'a, L> {
    pub(crate) fn new(lister: &'a L, options: &'a ScanOptions) -> Self {
        Self {
            lister,
            filter: &options.filter,
            exclude_terms: options.filter.exclude_terms(),
            max_depth: options.max_depth,
            ancestors: Vec::new(),
            files: Vec::new(),
            errors: Vec::new(),
            stats: ScanStats::default(),
        }
    }

    /// Walk the already-listed root directory. `prefix` is prepended to
    /// every reported path.
    pub(crate) fn walk_root(&mut self, prefix: &str, list_path: &str, entries: Vec<DirEntryInfo>) {
        let key = self.lister.canonical_key(list_path);
        self.enter(prefix, key, entries, 0);
    }

    fn enter(
        &mut self,
        dir: &str,
        key: Option<PathBuf>,
        entries: Vec<DirEntryInfo>,
        depth: usize,
    ) {
        self.stats.dirs_visited += 1;
        debug!("Walking {dir} ({} entries, depth {depth})", entries.len());

        let pushed = key.is_some();
        if let Some(key) = key {
            self.ancestors.push(key);
        }
        for entry in entries {
            self.visit(dir, entry, depth);
        }
        if pushed {
            self.ancestors.pop();
        }
    }

    fn visit(&mut self, dir: &str, entry: DirEntryInfo, depth: usize) {
        if entry.name == "." || entry.name == ".." {
            return;
        }
        if !entry.valid_name {
            let path = format!("{dir}/{}", entry.name);
            warn!("Skipping {path}: name is not valid UTF-8");
            self.stats.entries_invalid += 1;
            self.errors.push(DirError {
                path,
                kind: ScanErrorKind::InvalidName,
                message: "entry name is not valid UTF-8".to_string(),
            });
            return;
        }
        if ScanFilter::is_excluded(&self.exclude_terms, &entry.name) {
            self.stats.entries_excluded += 1;
            return;
        }

        let path = format!("{dir}/{}", entry.name);
        if entry.is_directory {
            self.descend(path, depth + 1);
        } else if self.filter.is_included(&entry.name, false) {
            self.files.push(path);
            self.stats.files_matched += 1;
        } else {
            self.stats.files_skipped += 1;
        }
    }

    fn descend(&mut self, path: String, depth: usize) {
        if let Some(marker) = self.filter.ignore_marker(&path) {
            if self.lister.file_exists(&marker) {
                debug!("Pruning {path}: contains {}", self.filter.dir_ignore_token);
                self.stats.dirs_pruned += 1;
                return;
            }
        }
        if self.max_depth.is_some_and(|max| depth > max) {
            self.stats.dirs_beyond_depth += 1;
            return;
        }

        let key = self.lister.canonical_key(&path);
        if key.as_ref().is_some_and(|k| self.ancestors.contains(k)) {
            warn!("Not following {path}: symlink cycle");
            self.stats.dirs_failed += 1;
            self.errors.push(DirError {
                path,
                kind: ScanErrorKind::SymlinkLoop,
                message: "directory resolves to one of its ancestors".to_string(),
            });
            return;
        }

        match self.lister.list_entries(&path) {
            Ok(entries) => self.enter(&path, key, entries, depth),
            Err(err) => {
                let err = ScanError::from_io(path, err);
                warn!("Skipping unreadable directory: {err}");
                self.stats.dirs_failed += 1;
                self.errors.push(DirError::from(err));
            }
        }
    }
}
