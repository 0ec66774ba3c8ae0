/// Directory listing capability consumed by the scanner.
///
/// The scanner never touches the filesystem directly. It asks a
/// `DirectoryLister` for one directory level at a time, which keeps the
/// recursion, filtering and error bookkeeping independent of the platform
/// and lets tests drive it from memory.
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    /// Entry name only, without the parent path.
    pub name: String,
    /// The entry is, or resolves to, a directory.
    pub is_directory: bool,
    /// The entry itself is a symbolic link.
    pub is_symlink: bool,
    /// `false` when the on-disk name is not valid UTF-8. `name` then holds a
    /// lossy rendering that does not name anything on disk.
    pub valid_name: bool,
}

impl DirEntryInfo {
    pub fn file(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: false,
            is_symlink: false,
            valid_name: true,
        }
    }

    pub fn directory(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_directory: true,
            is_symlink: false,
            valid_name: true,
        }
    }

    /// A symbolic link; `to_directory` says whether its target is a directory.
    pub fn symlink(name: impl Into<String>, to_directory: bool) -> Self {
        Self {
            name: name.into(),
            is_directory: to_directory,
            is_symlink: true,
            valid_name: true,
        }
    }

    /// An entry whose name cannot be represented as UTF-8.
    pub fn invalid_name(lossy_name: impl Into<String>, is_directory: bool) -> Self {
        Self {
            name: lossy_name.into(),
            is_directory,
            is_symlink: false,
            valid_name: false,
        }
    }
}

/// Abstract "list directory entries" capability.
pub trait DirectoryLister {
    /// List the direct entries of the directory at `path`.
    fn list_entries(&self, path: &str) -> io::Result<Vec<DirEntryInfo>>;

    /// Whether `path` names an existing regular file.
    fn file_exists(&self, path: &str) -> bool;

    /// A key identifying the directory behind `path` once links are
    /// resolved, used to stop symlink cycles. Listers that cannot resolve
    /// links return `None`, which disables the cycle check.
    fn canonical_key(&self, _path: &str) -> Option<PathBuf> {
        None
    }
}

/// Lister backed by the local filesystem.
///
/// Each call reads exactly one directory level with `jwalk`, serially and
/// sorted by name. Symlinks are not followed by the walk itself; a symlink
/// is reported as a directory when its target is one.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalLister;

impl LocalLister {
    pub fn new() -> Self {
        Self
    }
}

impl DirectoryLister for LocalLister {
    fn list_entries(&self, path: &str) -> io::Result<Vec<DirEntryInfo>> {
        // jwalk does not descend into a symlinked start path, so resolve it.
        let root = if std::fs::symlink_metadata(path)?.file_type().is_symlink() {
            std::fs::canonicalize(path)?
        } else {
            PathBuf::from(path)
        };
        let walker = jwalk::WalkDir::new(&root)
            .max_depth(1)
            .skip_hidden(false)
            .follow_links(false)
            .sort(true)
            .parallelism(jwalk::Parallelism::Serial);

        let mut entries = Vec::new();
        for entry_result in walker {
            let entry = entry_result.map_err(into_io_error)?;
            let entry_path = entry.path();
            let file_type = entry.file_type();

            // jwalk yields the starting path itself first.
            if entry_path == root {
                if !file_type.is_dir() {
                    return Err(io::Error::other(format!("{path} is not a directory")));
                }
                continue;
            }

            let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
                let lossy = entry.file_name().to_string_lossy().into_owned();
                entries.push(DirEntryInfo::invalid_name(lossy, file_type.is_dir()));
                continue;
            };
            let is_symlink = file_type.is_symlink();
            let is_directory = if is_symlink {
                std::fs::metadata(&entry_path).is_ok_and(|meta| meta.is_dir())
            } else {
                file_type.is_dir()
            };
            entries.push(DirEntryInfo {
                name,
                is_directory,
                is_symlink,
                valid_name: true,
            });
        }
        Ok(entries)
    }

    fn file_exists(&self, path: &str) -> bool {
        Path::new(path).is_file()
    }

    fn canonical_key(&self, path: &str) -> Option<PathBuf> {
        std::fs::canonicalize(path).ok()
    }
}

fn into_io_error(err: jwalk::Error) -> io::Error {
    let kind = err
        .io_error()
        .map(io::Error::kind)
        .unwrap_or(io::ErrorKind::Other);
    io::Error::new(kind, err.to_string())
}
