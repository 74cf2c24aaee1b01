//! vCard parameter types.

/// A vCard parameter.
///
/// Parameters can have multiple values (e.g., TYPE=home,work). The name is
/// kept as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VCardParameter {
    /// Parameter name.
    pub name: String,
    /// Parameter values.
    pub values: Vec<String>,
}

impl VCardParameter {
    /// Creates a new parameter with a single value.
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: vec![value.into()],
        }
    }

    // --- Convenience constructors ---

    /// Creates a TYPE parameter.
    #[must_use]
    pub fn type_param(value: impl Into<String>) -> Self {
        Self::new("TYPE", value)
    }

    /// Creates a VALUE parameter specifying the value type.
    #[must_use]
    pub fn value_type(type_name: impl Into<String>) -> Self {
        Self::new("VALUE", type_name)
    }
}

/// Common TYPE values as constants.
pub mod types {
    pub const CELL: &str = "CELL";
    pub const INTERNET: &str = "INTERNET";
    pub const GITHUB: &str = "github";
    pub const PREF: &str = "pref";
    pub const URI: &str = "URI";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parameter_keeps_name_case() {
        let param = VCardParameter::new("type", "pref");
        assert_eq!(param.name, "type");
        assert_eq!(param.values, vec!["pref".to_string()]);
    }

    #[test]
    fn value_type_parameter() {
        let param = VCardParameter::value_type(types::URI);
        assert_eq!(param.name, "VALUE");
        assert_eq!(param.values, vec!["URI".to_string()]);
    }
}
