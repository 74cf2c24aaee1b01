//! vCard wrapper type.

use super::property::{VCardProperty, names};

/// vCard version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VCardVersion {
    /// vCard 3.0 (RFC 2426). What phone scanners read most reliably.
    #[default]
    V3,
}

impl VCardVersion {
    /// Returns the version string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::V3 => "3.0",
        }
    }
}

/// A single contact record.
///
/// BEGIN, VERSION and END are implied and written by the serializer;
/// `properties` holds everything in between, in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VCard {
    pub version: VCardVersion,
    pub properties: Vec<VCardProperty>,
}

impl VCard {
    #[must_use]
    pub fn new(version: VCardVersion) -> Self {
        Self {
            version,
            properties: Vec::new(),
        }
    }

    pub fn add_property(&mut self, prop: VCardProperty) {
        self.properties.push(prop);
    }

    /// Returns the first property with the given name.
    #[must_use]
    pub fn get_property(&self, name: &str) -> Option<&VCardProperty> {
        self.properties.iter().find(|p| p.is_named(name))
    }

    /// Returns all properties with the given name.
    pub fn get_properties<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a VCardProperty> {
        self.properties.iter().filter(move |p| p.is_named(name))
    }

    /// Returns the formatted name (FN).
    #[must_use]
    pub fn formatted_name(&self) -> Option<&str> {
        self.get_property(names::FN).and_then(VCardProperty::as_text)
    }
}
