//! Line unfolding.

/// Unfolds a vCard document by removing line continuations.
///
/// A continuation is CRLF or bare LF followed by a single space or tab.
/// Other line breaks are normalized to LF.
#[must_use]
pub fn unfold(input: &str) -> String {
    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '\r' if chars.peek() == Some(&'\n') => {
                chars.next();
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            '\n' => {
                if matches!(chars.peek(), Some(' ' | '\t')) {
                    chars.next();
                } else {
                    result.push('\n');
                }
            }
            _ => result.push(c),
        }
    }

    result
}
