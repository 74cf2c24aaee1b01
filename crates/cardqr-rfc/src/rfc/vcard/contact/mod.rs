//! Contact record builder.
//!
//! Turns a [`ContactConfig`] into a vCard 3.0 record. Properties are added in
//! a fixed order so the same input always yields byte-identical output:
//!
//! ```text
//! FN, N, TEL, EMAIL, URL, X-SOCIALPROFILE, item1.URL, item1.X-ABLabel, ADR,
//! NOTE, PHOTO, KEY, X-PGP-FP, NICKNAME, X-PREFERRED-NAME
//! ```

mod fingerprint;
mod name;
mod uri;

use cardqr_core::config::ContactConfig;
use cardqr_core::types::LineEnding;

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::build::{EncodedPayload, serialize};
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty, VCardVersion, names, types};

pub use fingerprint::{FingerprintStrength, KeyFingerprint};
pub use name::{ResolvedName, resolve_name};
pub use uri::{github_profile_url, is_http_url, require_http_url};

/// Group tying the GitHub URL to its display label (Apple Contacts convention).
const GITHUB_ITEM_GROUP: &str = "item1";
const GITHUB_LABEL: &str = "GitHub";

/// Builds the vCard for `contact`.
///
/// ## Errors
/// - [`RfcError::MissingName`] if no full name, given name or surname is set.
/// - [`RfcError::InvalidUri`] if the avatar or key URI is not an http(s) URL.
/// - [`RfcError::InvalidFingerprint`] if the fingerprint is malformed.
pub fn build_vcard(contact: &ContactConfig) -> RfcResult<VCard> {
    let name = resolve_name(contact);
    if name.is_empty() {
        return Err(RfcError::MissingName);
    }

    let mut card = VCard::new(VCardVersion::V3);

    // Identity
    card.add_property(VCardProperty::text(names::FN, name.formatted.as_str()));
    card.add_property(VCardProperty::structured(
        names::N,
        [name.surname.as_str(), name.given.as_str(), "", "", ""],
    ));

    if let Some(phone) = present(&contact.phone) {
        card.add_property(
            VCardProperty::text(names::TEL, phone)
                .with_param(VCardParameter::type_param(types::CELL)),
        );
    }
    if let Some(email) = present(&contact.email) {
        card.add_property(
            VCardProperty::text(names::EMAIL, email)
                .with_param(VCardParameter::type_param(types::INTERNET)),
        );
    }

    if let Some(handle) = present(&contact.github) {
        add_github_links(&mut card, &github_profile_url(handle));
    }

    let city = contact.city.trim();
    let country = contact.country.trim();
    if !(city.is_empty() && country.is_empty()) {
        // PO box; extended; street; locality; region; postal code; country
        card.add_property(VCardProperty::structured(
            names::ADR,
            ["", "", "", city, "", "", country],
        ));
    }

    // Free text keeps its surrounding whitespace.
    if present(&contact.note).is_some() {
        card.add_property(VCardProperty::text(names::NOTE, contact.note.as_str()));
    }

    if let Some(avatar) = present(&contact.avatar) {
        let avatar = require_http_url("avatar", avatar)?;
        card.add_property(
            VCardProperty::uri(names::PHOTO, avatar)
                .with_param(VCardParameter::value_type(types::URI)),
        );
    }
    if let Some(key_uri) = present(&contact.pgp_key_uri) {
        let key_uri = require_http_url("pgp_key_uri", key_uri)?;
        card.add_property(
            VCardProperty::uri(names::KEY, key_uri)
                .with_param(VCardParameter::value_type(types::URI)),
        );
    }
    if let Some(raw) = present(&contact.pgp_fingerprint) {
        let fingerprint = KeyFingerprint::parse(raw)?;
        card.add_property(VCardProperty::text(names::X_PGP_FP, fingerprint.to_hex()));
    }

    if !name.preferred.is_empty() {
        card.add_property(VCardProperty::text(names::NICKNAME, name.preferred.as_str()));
        card.add_property(VCardProperty::text(
            names::X_PREFERRED_NAME,
            name.preferred.as_str(),
        ));
    }

    tracing::debug!(properties = card.properties.len(), "Built contact vCard");

    Ok(card)
}

/// Builds and serializes the vCard for `contact`.
///
/// ## Errors
/// Returns the same errors as [`build_vcard`].
pub fn encode_contact(contact: &ContactConfig, line_ending: LineEnding) -> RfcResult<EncodedPayload> {
    let card = build_vcard(contact)?;
    Ok(serialize(&card, line_ending))
}

fn add_github_links(card: &mut VCard, url: &str) {
    card.add_property(VCardProperty::uri(names::URL, url));
    card.add_property(
        VCardProperty::uri(names::X_SOCIALPROFILE, url)
            .with_param(VCardParameter::type_param(types::GITHUB)),
    );
    card.add_property(
        VCardProperty::uri(names::URL, url)
            .in_group(GITHUB_ITEM_GROUP)
            .with_param(VCardParameter::new("type", types::PREF)),
    );
    card.add_property(
        VCardProperty::text(names::X_ABLABEL, GITHUB_LABEL).in_group(GITHUB_ITEM_GROUP),
    );
}

/// Trimmed value, or `None` when blank.
fn present(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}
