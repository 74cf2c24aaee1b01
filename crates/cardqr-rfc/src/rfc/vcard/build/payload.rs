//! Serialized vCard text.

use cardqr_core::types::LineEnding;

/// The fully joined and folded text of a vCard.
///
/// This is the exact byte sequence handed to the barcode emitter and
/// written to `.vcf` files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedPayload {
    text: String,
    line_ending: LineEnding,
}

impl EncodedPayload {
    /// Wraps already-serialized vCard text.
    #[must_use]
    pub fn from_text(text: impl Into<String>, line_ending: LineEnding) -> Self {
        Self {
            text: text.into(),
            line_ending,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.text.as_bytes()
    }

    /// Length of the payload in UTF-8 bytes.
    #[must_use]
    pub fn byte_len(&self) -> usize {
        self.text.len()
    }

    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    /// Iterates over physical lines, without terminators.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        let ending = self.line_ending.as_str();
        self.text
            .strip_suffix(ending)
            .unwrap_or(&self.text)
            .split(ending)
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }
}

impl AsRef<str> for EncodedPayload {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for EncodedPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
