/// String utilities: tokenizing, bounded editing and path-like helpers.
///
/// Everything here is pure and allocation-only; nothing touches the
/// filesystem.
pub mod edit;
pub mod path;
pub mod tokenize;

pub use edit::{pad, replace, replace_masked, Side};
pub use path::{has_file_suffix, strip_common_prefix};
pub use tokenize::{join, split};
