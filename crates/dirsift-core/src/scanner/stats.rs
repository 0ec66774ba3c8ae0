/// Counters collected while a scan runs.
use serde::Serialize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScanStats {
    /// Directories listed successfully, the root included.
    pub dirs_visited: u64,
    /// Files that passed the filters and were reported.
    pub files_matched: u64,
    /// Files that failed the include filter.
    pub files_skipped: u64,
    /// Entries dropped by an exclude term.
    pub entries_excluded: u64,
    /// Directories skipped because they contain the ignore token.
    pub dirs_pruned: u64,
    /// Directories skipped because they are deeper than `max_depth`.
    pub dirs_beyond_depth: u64,
    /// Directories that could not be listed or that close a symlink cycle.
    pub dirs_failed: u64,
    /// Entries skipped because their name is not valid UTF-8.
    pub entries_invalid: u64,
}
