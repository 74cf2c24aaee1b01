use serde::Deserialize;

/// Line terminator used between vCard content lines.
///
/// CRLF is what RFC 2426 mandates; LF is accepted for unix-only consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineEnding {
    #[default]
    Crlf,
    Lf,
}

impl LineEnding {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }

    /// Name as it appears in configuration.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Crlf => "crlf",
            Self::Lf => "lf",
        }
    }
}

impl std::fmt::Display for LineEnding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// QR error-correction level requested from the barcode emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCorrection {
    /// Recovers ~7% of codewords.
    Low,
    /// Recovers ~15% of codewords.
    Medium,
    /// Recovers ~25% of codewords.
    #[default]
    Quartile,
    /// Recovers ~30% of codewords.
    High,
}

impl ErrorCorrection {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Quartile => "quartile",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_ending_terminators() {
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(LineEnding::Lf.as_str(), "\n");
        assert_eq!(LineEnding::default(), LineEnding::Crlf);
    }

    #[test]
    fn line_ending_display_uses_config_name() {
        assert_eq!(LineEnding::Lf.to_string(), "lf");
        assert_eq!(LineEnding::Crlf.name(), "crlf");
    }

    #[test]
    fn error_correction_default_is_quartile() {
        assert_eq!(ErrorCorrection::default(), ErrorCorrection::Quartile);
        assert_eq!(ErrorCorrection::High.to_string(), "high");
    }
}
