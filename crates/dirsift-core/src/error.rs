/// Error taxonomy for the string utilities and the directory scanner.
///
/// String errors are local and recoverable. Scan errors are either fatal
/// for the whole scan (the root could not be listed) or recorded per
/// directory in the scan report.
use serde::Serialize;
use std::io;
use thiserror::Error;

/// Failures reported by the tokenizer and string editing functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    /// An argument that must be non-empty was empty.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    /// `join` was given a start index past the last token.
    #[error("start index {index} out of range for {len} tokens")]
    OutOfRange { index: usize, len: usize },

    /// `replace_masked` was given a subject and mirror of different lengths.
    #[error("subject length {subject} does not match mirror length {mirror}")]
    LengthMismatch { subject: usize, mirror: usize },
}

/// A directory that could not be listed.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("directory not found: {path}")]
    NotFound { path: String },

    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    /// Classify an I/O failure for `path`.
    pub fn from_io(path: impl Into<String>, err: io::Error) -> Self {
        let path = path.into();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Path of the directory that failed.
    pub fn path(&self) -> &str {
        match self {
            Self::NotFound { path } | Self::PermissionDenied { path } | Self::Io { path, .. } => {
                path
            }
        }
    }

    pub fn kind(&self) -> ScanErrorKind {
        match self {
            Self::NotFound { .. } => ScanErrorKind::NotFound,
            Self::PermissionDenied { .. } => ScanErrorKind::PermissionDenied,
            Self::Io { .. } => ScanErrorKind::Io,
        }
    }
}

/// Serializable classification of a per-directory failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanErrorKind {
    NotFound,
    PermissionDenied,
    Io,
    /// A symlink that resolves to one of its own ancestors.
    SymlinkLoop,
    /// An entry whose name is not valid UTF-8; it is skipped.
    InvalidName,
}

impl ScanErrorKind {
    /// Short label for tabular output.
    pub fn label(self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::PermissionDenied => "permission_denied",
            Self::Io => "io",
            Self::SymlinkLoop => "symlink_loop",
            Self::InvalidName => "invalid_name",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_io_classifies_by_kind() {
        let err = ScanError::from_io("a", io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.kind(), ScanErrorKind::NotFound);
        assert_eq!(err.path(), "a");

        let err = ScanError::from_io("b", io::Error::from(io::ErrorKind::PermissionDenied));
        assert_eq!(err.kind(), ScanErrorKind::PermissionDenied);

        let err = ScanError::from_io("c", io::Error::other("disk on fire"));
        assert_eq!(err.kind(), ScanErrorKind::Io);
        assert!(err.to_string().contains("disk on fire"));
    }
}
