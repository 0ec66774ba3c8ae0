/// Bounded find/replace, masked replace and fixed-width padding.
///
/// All positions and lengths are counted in `char`s, not bytes.
use crate::error::TextError;

/// Which end of a string an operation applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Side {
    Left,
    #[default]
    Right,
}

/// Replace occurrences of `search` in `subject`.
///
/// A match is applied only while its index is `<= required_max_pos` (no cap
/// when `None`); the first match past the cap ends the scan. With
/// `max_replacements > 0` at most that many matches are applied.
///
/// After each splice the next search starts one character before the end of
/// the inserted replacement, or at the match index itself when the
/// replacement is empty. Overlapping rematches are therefore possible:
/// replacing `"aa"` with `"a"` in `"aaaa"` yields `"a"`.
///
/// # Termination
///
/// When `search` is a single character and `replacement` ends with that
/// character, the next search starts on the inserted copy and matches it
/// again, so with `max_replacements == 0` the call does not return. Set
/// `max_replacements` to bound it. A longer `search` always resumes past the
/// start of any copy at the end of the replacement.
pub fn replace(
    search: &str,
    replacement: &str,
    subject: &str,
    max_replacements: usize,
    required_max_pos: Option<usize>,
) -> String {
    if search.is_empty() {
        return subject.to_string();
    }

    let search: Vec<char> = search.chars().collect();
    let replacement: Vec<char> = replacement.chars().collect();
    let mut text: Vec<char> = subject.chars().collect();

    let mut cursor = 1;
    let mut applied = 0;
    while let Some(found) = find_from(&text, &search, cursor - 1) {
        if required_max_pos.is_some_and(|max| found > max) {
            break;
        }

        text.splice(found..found + search.len(), replacement.iter().copied());
        cursor = if replacement.is_empty() {
            found + 1
        } else {
            found + replacement.len()
        };

        applied += 1;
        if max_replacements > 0 && applied >= max_replacements {
            break;
        }
    }
    text.into_iter().collect()
}

/// Mask every match of `search` in `subject` and mirror the edit in `mirror`.
///
/// Each match is overwritten, in both strings, by the first character of
/// `replacement` repeated to the length of `search`, so both strings keep
/// their length and alignment. Matches are located in `subject` only. The
/// evolved `mirror` is returned. Cap and limit semantics are those of
/// [`replace`]; the cursor advances by the length of `replacement`.
///
/// # Termination
///
/// Masking removes the match from `subject` unless the mask equals `search`.
/// In that case the cursor resumes just past the match, so each occurrence is
/// mirrored once and the call always returns.
pub fn replace_masked(
    search: &str,
    replacement: &str,
    subject: &str,
    mirror: &str,
    max_replacements: usize,
    required_max_pos: Option<usize>,
) -> Result<String, TextError> {
    let mut subject: Vec<char> = subject.chars().collect();
    let mut mirror: Vec<char> = mirror.chars().collect();
    if subject.len() != mirror.len() {
        return Err(TextError::LengthMismatch {
            subject: subject.len(),
            mirror: mirror.len(),
        });
    }
    if search.is_empty() {
        return Ok(mirror.into_iter().collect());
    }
    let Some(mask_char) = replacement.chars().next() else {
        return Err(TextError::InvalidArgument(
            "replacement must supply a mask character",
        ));
    };

    let search: Vec<char> = search.chars().collect();
    let mask = vec![mask_char; search.len()];
    // A mask equal to `search` leaves the match in place.
    let advance = if mask == search {
        replacement.chars().count().max(search.len() + 1)
    } else {
        replacement.chars().count()
    };

    let mut cursor = 1;
    let mut applied = 0;
    while let Some(found) = find_from(&subject, &search, cursor - 1) {
        if required_max_pos.is_some_and(|max| found > max) {
            break;
        }

        let span = found..found + search.len();
        subject[span.clone()].copy_from_slice(&mask);
        mirror[span].copy_from_slice(&mask);
        cursor = found + advance;

        applied += 1;
        if max_replacements > 0 && applied >= max_replacements {
            break;
        }
    }
    Ok(mirror.into_iter().collect())
}

/// Pad or truncate `s` to exactly `target_length` characters.
///
/// Longer strings are truncated: `overflow_side == Left` keeps the tail,
/// `Right` keeps the head. Shorter strings receive whole copies of `fill` on
/// `pad_side` until they are long enough; a multi-character `fill` that
/// overshoots is then truncated by the same rule. An empty `fill` leaves
/// short strings untouched.
pub fn pad(s: &str, fill: &str, target_length: usize, pad_side: Side, overflow_side: Side) -> String {
    let len = s.chars().count();
    if len > target_length {
        return match overflow_side {
            Side::Left => s.chars().skip(len - target_length).collect(),
            Side::Right => s.chars().take(target_length).collect(),
        };
    }
    if fill.is_empty() {
        return s.to_string();
    }

    let fill_len = fill.chars().count();
    let mut filler = String::new();
    let mut filled = len;
    while filled < target_length {
        filler.push_str(fill);
        filled += fill_len;
    }

    let padded = match pad_side {
        Side::Left => filler + s,
        Side::Right => format!("{s}{filler}"),
    };
    if filled > target_length {
        pad(&padded, fill, target_length, pad_side, overflow_side)
    } else {
        padded
    }
}

fn find_from(haystack: &[char], needle: &[char], from: usize) -> Option<usize> {
    if from >= haystack.len() || haystack.len() - from < needle.len() {
        return None;
    }
    haystack[from..]
        .windows(needle.len())
        .position(|window| window == needle)
        .map(|offset| offset + from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_respects_max_replacements() {
        assert_eq!(replace("a", "b", "aaa", 2, None), "bba");
        assert_eq!(replace("a", "b", "aaa", 0, None), "bbb");
    }

    #[test]
    fn test_replace_empty_search_is_noop() {
        assert_eq!(replace("", "x", "subject", 0, None), "subject");
    }

    #[test]
    fn test_replace_stops_past_required_position() {
        assert_eq!(replace("a", "X", "banana", 0, Some(2)), "bXnana");
        assert_eq!(replace("a", "X", "banana", 0, Some(0)), "banana");
    }

    #[test]
    fn test_replace_with_empty_replacement_deletes() {
        assert_eq!(replace("ab", "", "xababy", 0, None), "xy");
    }

    #[test]
    fn test_replace_rematches_overlapping_output() {
        assert_eq!(replace("aa", "a", "aaaa", 0, None), "a");
    }

    #[test]
    fn test_replace_longer_search_resumes_past_own_output() {
        assert_eq!(replace("aa", "aaa", "aa", 0, None), "aaa");
    }

    #[test]
    fn test_replace_self_feeding_single_char_is_bounded_by_limit() {
        assert_eq!(replace("a", "ba", "a", 3, None), "bbba");
    }

    #[test]
    fn test_replace_longer_replacement() {
        assert_eq!(replace("${name}", "world", "hello ${name}!", 0, None), "hello world!");
    }

    #[test]
    fn test_replace_masked_edits_both_strings() {
        let mirror = replace_masked("secret", "*", "pw=secret;", "PW=SECRET;", 0, None).unwrap();
        assert_eq!(mirror, "PW=******;");
    }

    #[test]
    fn test_replace_masked_uses_first_replacement_char() {
        let mirror = replace_masked("ab", "#-", "abxab", "12345", 0, None).unwrap();
        assert_eq!(mirror, "##3##");
    }

    #[test]
    fn test_replace_masked_respects_limits() {
        let mirror = replace_masked("a", "_", "aaaa", "wxyz", 2, None).unwrap();
        assert_eq!(mirror, "__yz");
        let mirror = replace_masked("a", "_", "aaaa", "wxyz", 0, Some(1)).unwrap();
        assert_eq!(mirror, "__yz");
    }

    #[test]
    fn test_replace_masked_mask_equal_to_search_returns() {
        let mirror = replace_masked("*", "*", "a*b", "xyz", 0, None).unwrap();
        assert_eq!(mirror, "x*z");
        let mirror = replace_masked("*", "*", "a*b*", "wxyz", 0, None).unwrap();
        assert_eq!(mirror, "w*y*");
        let mirror = replace_masked("**", "*", "****", "abcd", 0, None).unwrap();
        assert_eq!(mirror, "****");
    }

    #[test]
    fn test_replace_masked_length_mismatch() {
        assert_eq!(
            replace_masked("a", "_", "abc", "ab", 0, None),
            Err(TextError::LengthMismatch {
                subject: 3,
                mirror: 2
            })
        );
    }

    #[test]
    fn test_replace_masked_empty_search_returns_mirror() {
        assert_eq!(replace_masked("", "_", "abc", "xyz", 0, None).unwrap(), "xyz");
    }

    #[test]
    fn test_replace_masked_requires_mask_char() {
        assert!(matches!(
            replace_masked("a", "", "abc", "xyz", 0, None),
            Err(TextError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_pad_multi_char_fill_converges() {
        let padded = pad("x", "ab", 5, Side::Right, Side::Right);
        assert_eq!(padded, "xabab");
        assert_eq!(padded.chars().count(), 5);

        assert_eq!(pad("x", "ab", 4, Side::Right, Side::Right), "xaba");
        assert_eq!(pad("x", "ab", 4, Side::Left, Side::Left), "babx");
    }

    #[test]
    fn test_pad_left_and_right() {
        assert_eq!(pad("7", "0", 3, Side::Left, Side::Right), "007");
        assert_eq!(pad("ab", ".", 4, Side::Right, Side::Right), "ab..");
        assert_eq!(pad("abc", " ", 3, Side::Left, Side::Left), "abc");
    }

    #[test]
    fn test_pad_truncates_by_overflow_side() {
        assert_eq!(pad("abcdef", "-", 3, Side::Right, Side::Right), "abc");
        assert_eq!(pad("abcdef", "-", 3, Side::Right, Side::Left), "def");
        assert_eq!(pad("abcdef", "-", 0, Side::Right, Side::Right), "");
    }

    #[test]
    fn test_pad_empty_fill_leaves_short_string() {
        assert_eq!(pad("ab", "", 5, Side::Right, Side::Right), "ab");
    }
}
