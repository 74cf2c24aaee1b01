//! Formatted and structured name resolution.

use cardqr_core::config::ContactConfig;

/// Names after trimming and fallback derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedName {
    /// FN value.
    pub formatted: String,
    pub given: String,
    pub surname: String,
    /// NICKNAME / X-PREFERRED-NAME value; empty when not supplied.
    pub preferred: String,
}

impl ResolvedName {
    /// True when neither a full name nor a given name/surname was supplied.
    ///
    /// A preferred name alone does not count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.given.is_empty() && self.surname.is_empty()
    }
}

/// Resolves the formatted name and the given/surname split.
///
/// - Given/surname are taken as supplied. When both are empty, the full name
///   is split on whitespace: the last token is the surname and the rest the
///   given name, or the single token is the given name.
/// - FN is the full name when supplied, else the preferred name (plus
///   surname), else given and surname joined by a space.
#[must_use]
pub fn resolve_name(contact: &ContactConfig) -> ResolvedName {
    let full = contact.name.trim();
    let preferred = contact.preferred_name.trim();
    let (given, surname) = split_name(contact.given.trim(), contact.surname.trim(), full);

    let formatted = if full.is_empty() {
        match (preferred.is_empty(), surname.is_empty()) {
            (false, false) => format!("{preferred} {surname}"),
            (false, true) => preferred.to_string(),
            (true, _) => [given.as_str(), surname.as_str()]
                .into_iter()
                .filter(|part| !part.is_empty())
                .collect::<Vec<_>>()
                .join(" "),
        }
    } else {
        full.to_string()
    };

    ResolvedName {
        formatted,
        given,
        surname,
        preferred: preferred.to_string(),
    }
}

fn split_name(given: &str, surname: &str, full: &str) -> (String, String) {
    if !(given.is_empty() && surname.is_empty()) {
        return (given.to_string(), surname.to_string());
    }

    let tokens: Vec<&str> = full.split_whitespace().collect();
    match tokens.split_last() {
        Some((last, rest)) if !rest.is_empty() => (rest.join(" "), (*last).to_string()),
        _ => (full.to_string(), String::new()),
    }
}
