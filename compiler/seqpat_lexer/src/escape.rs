//! Escape Sequence Processing
//!
//! Recognized escapes: `\n`, `\r`, `\t`, `\\`, `\"`, `\'`, `\0`

/// Resolve a single escape character to its replacement.
#[inline]
fn resolve_escape(c: char) -> Option<char> {
    match c {
        'n' => Some('\n'),
        'r' => Some('\r'),
        't' => Some('\t'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        '\'' => Some('\''),
        '0' => Some('\0'),
        _ => None,
    }
}

/// Process escape sequences in the body of a string or char literal.
///
/// Returns `None` on the first unrecognized escape.
pub(crate) fn unescape(s: &str) -> Option<String> {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c == '\\' {
            result.push(resolve_escape(chars.next()?)?);
        } else {
            result.push(c);
        }
    }

    Some(result)
}
