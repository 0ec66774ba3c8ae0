/// Delimiter-based helpers for path-like strings.
use super::tokenize::{join, split};
use crate::error::TextError;

/// Drop the first `delimiter`-separated segment from both `a` and `b`.
///
/// The two dropped segments are not compared with each other. A string
/// without the delimiter is a single segment and becomes empty.
pub fn strip_common_prefix(
    a: &str,
    b: &str,
    delimiter: &str,
) -> Result<(String, String), TextError> {
    Ok((
        drop_first_segment(a, delimiter)?,
        drop_first_segment(b, delimiter)?,
    ))
}

fn drop_first_segment(s: &str, delimiter: &str) -> Result<String, TextError> {
    let segments = split(s, delimiter, 0)?;
    if segments.len() < 2 {
        return Ok(String::new());
    }
    join(&segments, delimiter, 1, 0)
}

/// Case-insensitive check of the text after the last `.` in `name`.
///
/// A name without a dot is compared as a whole.
pub fn has_file_suffix(name: &str, suffix: &str) -> bool {
    match split(name, ".", 0) {
        Ok(parts) => parts
            .last()
            .is_some_and(|last| last.to_lowercase() == suffix.to_lowercase()),
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_common_prefix() {
        assert_eq!(
            strip_common_prefix("a/b/c", "a/b/d", "/").unwrap(),
            ("b/c".to_string(), "b/d".to_string())
        );
    }

    #[test]
    fn test_strip_does_not_compare_prefixes() {
        assert_eq!(
            strip_common_prefix("left/x", "right/y", "/").unwrap(),
            ("x".to_string(), "y".to_string())
        );
    }

    #[test]
    fn test_strip_without_delimiter_yields_empty() {
        assert_eq!(
            strip_common_prefix("plain", "a::b", "::").unwrap(),
            (String::new(), "b".to_string())
        );
    }

    #[test]
    fn test_strip_empty_delimiter_is_rejected() {
        assert!(strip_common_prefix("a", "b", "").is_err());
    }

    #[test]
    fn test_has_file_suffix() {
        assert!(has_file_suffix("shader.GLSL", "glsl"));
        assert!(has_file_suffix("archive.tar.gz", "GZ"));
        assert!(!has_file_suffix("archive.tar.gz", "tar"));
        assert!(has_file_suffix("Makefile", "makefile"));
    }
}
