//! vCard serialization.

use super::escape::{escape_param_value, escape_text};
use super::fold::{DEFAULT_FOLD_WIDTH, fold_line};
use super::payload::EncodedPayload;
use crate::rfc::vcard::core::{VCard, VCardParameter, VCardProperty, VCardValue, names};
use cardqr_core::types::LineEnding;

/// Serializes a vCard to its wire form.
///
/// ## Summary
/// Emits BEGIN and VERSION first, the card's properties in insertion order,
/// then END. Every content line is folded at 75 octets and terminated with
/// `line_ending`, including the last one.
#[must_use]
pub fn serialize(card: &VCard, line_ending: LineEnding) -> EncodedPayload {
    let ending = line_ending.as_str();
    let mut output = String::new();

    let mut push_line = |line: &str| {
        output.push_str(&fold_line(line, DEFAULT_FOLD_WIDTH, line_ending));
        output.push_str(ending);
    };

    push_line(&format!("{}:VCARD", names::BEGIN));
    push_line(&format!("{}:{}", names::VERSION, card.version.as_str()));

    for prop in &card.properties {
        push_line(&serialize_property(prop));
    }

    push_line(&format!("{}:VCARD", names::END));

    EncodedPayload::from_text(output, line_ending)
}

/// Serializes one property to an unfolded content line, without terminator.
#[must_use]
pub fn serialize_property(prop: &VCardProperty) -> String {
    let mut line = String::new();

    // Group prefix
    if let Some(ref group) = prop.group {
        line.push_str(group);
        line.push('.');
    }

    line.push_str(&prop.name);

    for param in &prop.params {
        serialize_parameter(param, &mut line);
    }

    line.push(':');
    serialize_value(&prop.value, &mut line);

    line
}

fn serialize_parameter(param: &VCardParameter, output: &mut String) {
    output.push(';');
    output.push_str(&param.name);
    output.push('=');

    for (i, value) in param.values.iter().enumerate() {
        if i > 0 {
            output.push(',');
        }

        let (escaped, needs_quotes) = escape_param_value(value);

        if needs_quotes {
            output.push('"');
            output.push_str(&escaped);
            output.push('"');
        } else {
            output.push_str(&escaped);
        }
    }
}

fn serialize_value(value: &VCardValue, output: &mut String) {
    match value {
        VCardValue::Text(s) | VCardValue::Uri(s) => {
            output.push_str(&escape_text(s));
        }
        VCardValue::Structured(parts) => {
            for (i, part) in parts.iter().enumerate() {
                if i > 0 {
                    output.push(';');
                }
                output.push_str(&escape_text(part));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rfc::vcard::core::{VCardVersion, types};

    fn sample_card() -> VCard {
        let mut card = VCard::new(VCardVersion::V3);
        card.add_property(VCardProperty::text(names::FN, "Doe, John"));
        card.add_property(VCardProperty::structured(names::N, ["Doe", "John", "", "", ""]));
        card.add_property(
            VCardProperty::text(names::TEL, "+1-555-0100")
                .with_param(VCardParameter::type_param(types::CELL)),
        );
        card
    }

    #[test]
    fn serialize_envelope_and_order() {
        let payload = serialize(&sample_card(), LineEnding::Crlf);

        assert_eq!(
            payload.as_str(),
            "BEGIN:VCARD\r\n\
             VERSION:3.0\r\n\
             FN:Doe\\, John\r\n\
             N:Doe;John;;;\r\n\
             TEL;TYPE=CELL:+1-555-0100\r\n\
             END:VCARD\r\n"
        );
    }

    #[test]
    fn serialize_lf_has_no_carriage_returns() {
        let payload = serialize(&sample_card(), LineEnding::Lf);

        assert!(!payload.as_str().contains('\r'));
        assert!(payload.as_str().ends_with("END:VCARD\n"));
        assert_eq!(payload.lines().count(), 6);
    }

    #[test]
    fn serialize_grouped_property() {
        let prop = VCardProperty::uri(names::URL, "https://github.com/alice")
            .in_group("item1")
            .with_param(VCardParameter::new("type", types::PREF));

        assert_eq!(
            serialize_property(&prop),
            "item1.URL;type=pref:https://github.com/alice"
        );
    }

    #[test]
    fn structured_components_escape_semicolons() {
        let prop = VCardProperty::structured(names::ADR, ["", "", "", "Paris; Left Bank", "", "", "France"]);

        assert_eq!(serialize_property(&prop), "ADR:;;;Paris\\; Left Bank;;;France");
    }

    #[test]
    fn quoted_parameter_value() {
        let prop = VCardProperty::text(names::NOTE, "hi")
            .with_param(VCardParameter::type_param("a:b"));

        assert_eq!(serialize_property(&prop), "NOTE;TYPE=\"a:b\":hi");
    }

    #[test]
    fn long_lines_are_folded() {
        let mut card = VCard::new(VCardVersion::V3);
        card.add_property(VCardProperty::text(names::NOTE, "x".repeat(200)));

        let payload = serialize(&card, LineEnding::Crlf);

        for line in payload.lines() {
            assert!(line.len() <= DEFAULT_FOLD_WIDTH + 1, "{line:?}");
        }
        assert!(payload.as_str().contains("\r\n x"));
    }
}
