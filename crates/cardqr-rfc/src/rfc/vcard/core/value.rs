//! vCard property values.

/// A vCard property value, kept unescaped until serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VCardValue {
    /// Free text (FN, NOTE, EMAIL, ...).
    Text(String),
    /// A URI (URL, PHOTO, KEY). Escaped like text on output.
    Uri(String),
    /// Semicolon-separated components (N, ADR). Each component is escaped
    /// individually so embedded semicolons cannot shift positions.
    Structured(Vec<String>),
}

impl VCardValue {
    /// Returns the value as a single string, if it is not structured.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) | Self::Uri(s) => Some(s),
            Self::Structured(_) => None,
        }
    }

    /// Returns the components of a structured value.
    #[must_use]
    pub fn components(&self) -> Option<&[String]> {
        match self {
            Self::Structured(parts) => Some(parts),
            Self::Text(_) | Self::Uri(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_match_variant() {
        let text = VCardValue::Text("hello".into());
        assert_eq!(text.as_str(), Some("hello"));
        assert!(text.components().is_none());

        let structured = VCardValue::Structured(vec!["Doe".into(), "John".into()]);
        assert!(structured.as_str().is_none());
        assert_eq!(structured.components().map(<[String]>::len), Some(2));
    }
}
