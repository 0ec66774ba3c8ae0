/// In-memory `DirectoryLister` for exercising the scanner without a disk.
///
/// Useful for reproducing conditions a temporary directory cannot, such as
/// permission failures when running as root, or symlink cycles on platforms
/// without symlinks.
use super::lister::{DirEntryInfo, DirectoryLister};
use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

#[derive(Debug, Default, Clone)]
pub struct MemoryLister {
    dirs: HashMap<String, Vec<DirEntryInfo>>,
    failures: HashMap<String, io::ErrorKind>,
    aliases: HashMap<String, String>,
}

impl MemoryLister {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a directory and its entries. Child directories must be
    /// registered separately under `path/name`.
    pub fn dir(mut self, path: &str, entries: Vec<DirEntryInfo>) -> Self {
        self.dirs.insert(path.to_string(), entries);
        self
    }

    /// Make listing `path` fail with `kind`.
    pub fn failing(mut self, path: &str, kind: io::ErrorKind) -> Self {
        self.failures.insert(path.to_string(), kind);
        self
    }

    /// Make `link` resolve to the directory registered at `target`.
    pub fn alias(mut self, link: &str, target: &str) -> Self {
        self.aliases.insert(link.to_string(), target.to_string());
        self
    }

    fn resolve<'a>(&'a self, path: &'a str) -> &'a str {
        self.aliases.get(path).map(String::as_str).unwrap_or(path)
    }
}

impl DirectoryLister for MemoryLister {
    fn list_entries(&self, path: &str) -> io::Result<Vec<DirEntryInfo>> {
        if let Some(&kind) = self.failures.get(path) {
            return Err(io::Error::from(kind));
        }
        self.dirs
            .get(self.resolve(path))
            .cloned()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }

    fn file_exists(&self, path: &str) -> bool {
        let Some((dir, name)) = path.rsplit_once('/') else {
            return false;
        };
        self.dirs
            .get(self.resolve(dir))
            .is_some_and(|entries| entries.iter().any(|e| e.name == name && !e.is_directory))
    }

    fn canonical_key(&self, path: &str) -> Option<PathBuf> {
        Some(PathBuf::from(self.resolve(path)))
    }
}
