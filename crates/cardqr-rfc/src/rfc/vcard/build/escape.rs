//! vCard text escaping.

/// Escapes a text value for vCard serialization.
///
/// Backslash, semicolon and comma gain a leading backslash; CRLF and bare LF
/// both become the two characters `\n`. A CR that is not part of CRLF is
/// kept as-is. Empty input yields an empty string.
#[must_use]
pub fn escape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\\' => result.push_str("\\\\"),
            ';' => result.push_str("\\;"),
            ',' => result.push_str("\\,"),
            '\n' => result.push_str("\\n"),
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                result.push_str("\\n");
            }
            _ => result.push(c),
        }
    }

    result
}

/// Escapes a parameter value for vCard serialization.
///
/// Uses RFC 6868 caret encoding for special characters.
/// Returns `(value, needs_quotes)`.
#[must_use]
pub fn escape_param_value(s: &str) -> (String, bool) {
    let mut result = String::with_capacity(s.len());
    let mut needs_quotes = false;

    for c in s.chars() {
        match c {
            '^' => result.push_str("^^"),
            '\n' => result.push_str("^n"),
            '"' => {
                result.push_str("^'");
                needs_quotes = true;
            }
            ':' | ';' | ',' => {
                result.push(c);
                needs_quotes = true;
            }
            _ if c.is_control() => {}
            _ => result.push(c),
        }
    }

    (result, needs_quotes)
}
