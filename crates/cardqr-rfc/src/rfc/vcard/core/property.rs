//! vCard property types.

use super::parameter::VCardParameter;
use super::value::VCardValue;

/// A vCard property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardProperty {
    /// Optional property group (e.g., "item1" in "item1.URL").
    pub group: Option<String>,
    /// Property name, as written.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<VCardParameter>,
    /// Unescaped value.
    pub value: VCardValue,
}

impl VCardProperty {
    fn with_value(name: impl Into<String>, value: VCardValue) -> Self {
        Self {
            group: None,
            name: name.into(),
            params: Vec::new(),
            value,
        }
    }

    /// Creates a property with a text value.
    #[must_use]
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Text(value.into()))
    }

    /// Creates a property with a URI value.
    #[must_use]
    pub fn uri(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self::with_value(name, VCardValue::Uri(value.into()))
    }

    /// Creates a property with a structured (semicolon-separated) value.
    #[must_use]
    pub fn structured<I, S>(name: impl Into<String>, components: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_value(
            name,
            VCardValue::Structured(components.into_iter().map(Into::into).collect()),
        )
    }

    /// Places the property in a group.
    #[must_use]
    pub fn in_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Appends a parameter.
    #[must_use]
    pub fn with_param(mut self, param: VCardParameter) -> Self {
        self.params.push(param);
        self
    }

    /// Returns whether this property is named `name` (case-insensitive).
    #[must_use]
    pub fn is_named(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }

    /// Returns the value as text if it is a text or URI value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        self.value.as_str()
    }
}

/// Property names emitted by the contact builder.
pub mod names {
    // Structural
    pub const BEGIN: &str = "BEGIN";
    pub const END: &str = "END";
    pub const VERSION: &str = "VERSION";

    // Identification
    pub const FN: &str = "FN";
    pub const N: &str = "N";
    pub const NICKNAME: &str = "NICKNAME";
    pub const PHOTO: &str = "PHOTO";

    // Delivery addressing
    pub const ADR: &str = "ADR";

    // Communications
    pub const TEL: &str = "TEL";
    pub const EMAIL: &str = "EMAIL";

    // Explanatory
    pub const NOTE: &str = "NOTE";
    pub const URL: &str = "URL";

    // Security
    pub const KEY: &str = "KEY";

    // Extensions
    pub const X_SOCIALPROFILE: &str = "X-SOCIALPROFILE";
    pub const X_ABLABEL: &str = "X-ABLabel";
    pub const X_PGP_FP: &str = "X-PGP-FP";
    pub const X_PREFERRED_NAME: &str = "X-PREFERRED-NAME";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_text() {
        let prop = VCardProperty::text("FN", "John Doe");
        assert_eq!(prop.name, "FN");
        assert_eq!(prop.as_text(), Some("John Doe"));
    }

    #[test]
    fn property_grouped() {
        let prop = VCardProperty::uri("URL", "https://example.com").in_group("item1");
        assert_eq!(prop.group, Some("item1".to_string()));
        assert_eq!(prop.name, "URL");
        assert!(matches!(prop.value, VCardValue::Uri(_)));
    }

    #[test]
    fn params_keep_insertion_order() {
        let prop = VCardProperty::uri("PHOTO", "https://example.com/a.jpg")
            .with_param(VCardParameter::value_type("URI"))
            .with_param(VCardParameter::type_param("JPEG"));

        let emitted: Vec<&str> = prop.params.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(emitted, vec!["VALUE", "TYPE"]);
    }

    #[test]
    fn structured_components() {
        let prop = VCardProperty::structured("N", ["Lovelace", "Ada", "", "", ""]);
        assert!(prop.is_named("n"));
        assert_eq!(prop.value.components().map(<[String]>::len), Some(5));
        assert!(prop.as_text().is_none());
    }
}
