/// Escape-aware splitting on multi-character delimiters, and its inverse.
///
/// Matching works on Unicode scalar values. A backslash suppresses delimiter
/// matching for the character right after it but is itself kept in the token.
use crate::error::TextError;

/// Split `input` on every unescaped occurrence of `delimiter`.
///
/// The match cursor advances one delimiter character at a time. When a
/// partial match is broken, the characters already matched are dropped and
/// the breaking character goes into the token without being re-tested
/// against the start of the delimiter. A token is closed when the delimiter
/// completes or the input ends, so a trailing delimiter does not produce a
/// trailing empty token.
///
/// With `max_parts > 0` splitting stops once that many tokens have been
/// produced and the rest of the input is discarded.
///
/// ```
/// use dirsift_core::text::split;
///
/// assert_eq!(split("a::b::c", "::", 0).unwrap(), ["a", "b", "c"]);
/// assert_eq!(split(r"a\,b,c", ",", 0).unwrap(), [r"a\,b", "c"]);
/// ```
pub fn split(input: &str, delimiter: &str, max_parts: usize) -> Result<Vec<String>, TextError> {
    if delimiter.is_empty() {
        return Err(TextError::InvalidArgument("delimiter must not be empty"));
    }
    if input == delimiter {
        return Ok(vec![input.to_string()]);
    }

    let delimiter: Vec<char> = delimiter.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut fpos = 0;
    let mut last_char = None;

    let mut chars = input.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == delimiter[fpos] && last_char != Some('\\') {
            fpos += 1;
        } else {
            current.push(ch);
            fpos = 0;
        }

        if fpos == delimiter.len() || chars.peek().is_none() {
            fpos = 0;
            tokens.push(std::mem::take(&mut current));
            if max_parts > 0 && tokens.len() >= max_parts {
                return Ok(tokens);
            }
        }
        last_char = Some(ch);
    }

    // Only reachable for empty input.
    if tokens.is_empty() {
        tokens.push(input.to_string());
    }
    Ok(tokens)
}

/// Join `tokens` with `delimiter`, starting at `start_index`.
///
/// `trailing_drop` removes tokens from the end of the delimited run, but the
/// last token is always appended, so `join(&["a", "b", "c", "d"], ",", 0, 1)`
/// yields `"a,b,d"`. A single token is returned as is whatever the other
/// arguments are.
pub fn join<S: AsRef<str>>(
    tokens: &[S],
    delimiter: &str,
    start_index: usize,
    trailing_drop: usize,
) -> Result<String, TextError> {
    let last = match tokens {
        [] => return Ok(String::new()),
        [only] => return Ok(only.as_ref().to_string()),
        _ => tokens.len() - 1,
    };

    if start_index > last {
        return Err(TextError::OutOfRange {
            index: start_index,
            len: tokens.len(),
        });
    }

    let end = last.saturating_sub(trailing_drop);
    let mut joined = String::new();
    for token in tokens.iter().take(end).skip(start_index) {
        joined.push_str(token.as_ref());
        joined.push_str(delimiter);
    }
    joined.push_str(tokens[last].as_ref());
    Ok(joined)
}
