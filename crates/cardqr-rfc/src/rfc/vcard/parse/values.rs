//! Value unescaping.

/// Unescapes a vCard text value.
///
/// vCard escapes: \n, \N (newline), \, (comma), \; (semicolon), \\ (backslash).
/// Unknown escapes are kept verbatim.
#[must_use]
pub fn unescape_text(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.peek() {
                Some('n' | 'N') => {
                    chars.next();
                    result.push('\n');
                }
                Some(&escaped @ (',' | ';' | '\\')) => {
                    chars.next();
                    result.push(escaped);
                }
                _ => result.push(c),
            }
        } else {
            result.push(c);
        }
    }

    result
}
