/// Name-based include/exclude filtering and the directory ignore sentinel.
use serde::{Deserialize, Serialize};

/// Filters applied to every directory entry during a scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanFilter {
    /// Substring a file name must contain. Empty accepts every file.
    /// Directories are never rejected by this filter.
    pub include_filter: String,

    /// Space-separated substrings. An entry whose name contains any of them
    /// is skipped, and an excluded directory is not entered.
    pub exclude_filter: String,

    /// File name that, when present directly inside a directory, prunes
    /// that directory from the scan. Empty disables pruning.
    pub dir_ignore_token: String,
}

impl ScanFilter {
    pub fn new(
        include_filter: impl Into<String>,
        exclude_filter: impl Into<String>,
        dir_ignore_token: impl Into<String>,
    ) -> Self {
        Self {
            include_filter: include_filter.into(),
            exclude_filter: exclude_filter.into(),
            dir_ignore_token: dir_ignore_token.into(),
        }
    }

    /// Exclude terms, with the empty ones left by repeated spaces dropped.
    pub fn exclude_terms(&self) -> Vec<&str> {
        self.exclude_filter
            .split(' ')
            .filter(|term| !term.is_empty())
            .collect()
    }

    /// `name` contains one of `terms`.
    pub fn is_excluded(terms: &[&str], name: &str) -> bool {
        terms.iter().any(|term| name.contains(term))
    }

    /// Whether an entry would be reported, ignoring exclusion. Directories
    /// are only eligible for recursion, never reported, so they only pass
    /// when the include filter is empty.
    pub fn is_included(&self, name: &str, is_dir: bool) -> bool {
        self.include_filter.is_empty() || (!is_dir && name.contains(&self.include_filter))
    }

    /// Path of the sentinel file inside `dir`, if pruning is enabled.
    pub fn ignore_marker(&self, dir: &str) -> Option<String> {
        if self.dir_ignore_token.is_empty() {
            None
        } else {
            Some(format!("{dir}/{}", self.dir_ignore_token))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exclude_terms_skip_empty() {
        let filter = ScanFilter::new("", " tmp  bak ", "");
        assert_eq!(filter.exclude_terms(), ["tmp", "bak"]);
        assert!(ScanFilter::default().exclude_terms().is_empty());
    }

    #[test]
    fn test_is_excluded_by_substring() {
        let filter = ScanFilter::new("", "tmp .git", "");
        let terms = filter.exclude_terms();
        assert!(ScanFilter::is_excluded(&terms, "skip.tmp"));
        assert!(ScanFilter::is_excluded(&terms, ".gitignore"));
        assert!(!ScanFilter::is_excluded(&terms, "keep.txt"));
    }

    #[test]
    fn test_is_included() {
        let all = ScanFilter::default();
        assert!(all.is_included("anything", false));
        assert!(all.is_included("dir", true));

        let only_txt = ScanFilter::new(".txt", "", "");
        assert!(only_txt.is_included("keep.txt", false));
        assert!(!only_txt.is_included("image.png", false));
        assert!(!only_txt.is_included("notes.txt", true));
    }

    #[test]
    fn test_ignore_marker() {
        assert_eq!(ScanFilter::default().ignore_marker("a"), None);
        assert_eq!(
            ScanFilter::new("", "", ".stop").ignore_marker("root/sub"),
            Some("root/sub/.stop".to_string())
        );
    }
}
