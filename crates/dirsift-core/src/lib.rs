/// dirsift core: string tokenizing, filtered scanning and the tree model.
///
/// This crate contains all logic with zero front-end dependencies.
///
/// # Modules
///
/// - [`text`]: Escape-aware split/join, bounded replace, padding, prefix stripping.
/// - [`scanner`]: Recursive filter-driven scanning over an abstract directory lister.
/// - [`model`]: Arena-allocated directory tree and its level-first serializer.
/// - [`config`]: Scan options, loadable from JSON.
/// - [`error`]: Error types shared by the modules above.
pub mod config;
pub mod error;
pub mod model;
pub mod scanner;
pub mod text;

pub use config::ScanOptions;
pub use error::{ScanError, ScanErrorKind, TextError};
pub use scanner::{scan, scan_with, ScanFilter, ScanReport};
