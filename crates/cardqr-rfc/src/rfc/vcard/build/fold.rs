//! vCard line folding.

use cardqr_core::types::LineEnding;

/// Maximum line length in octets per RFC 2426 / RFC 6350.
pub const DEFAULT_FOLD_WIDTH: usize = 75;

/// Folds a line to at most `width` octets per segment.
///
/// Lines longer than `width` are split, and every segment after the first is
/// written as `line_ending` followed by a single space. Folds at UTF-8
/// character boundaries; a segment always holds at least one character.
/// A line already within `width` is returned unchanged.
#[must_use]
pub fn fold_line(line: &str, width: usize, line_ending: LineEnding) -> String {
    debug_assert!(width > 0, "fold width must be at least 1");

    if line.len() <= width {
        return line.to_string();
    }

    let separator = line_ending.as_str();
    let folds = line.len() / width.max(1);
    let mut result = String::with_capacity(line.len() + folds * (separator.len() + 1));
    let mut current_len = 0;

    for c in line.chars() {
        let char_len = c.len_utf8();

        if current_len > 0 && current_len + char_len > width {
            result.push_str(separator);
            result.push(' ');
            current_len = 0;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}
