//! vCard serialization.
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_core::types::LineEnding;
//! use cardqr_rfc::rfc::vcard::{VCard, VCardProperty, VCardVersion, serialize};
//!
//! let mut card = VCard::new(VCardVersion::V3);
//! card.add_property(VCardProperty::text("FN", "John Doe"));
//! card.add_property(VCardProperty::text("EMAIL", "john@example.com"));
//!
//! let payload = serialize(&card, LineEnding::Crlf);
//! assert!(payload.as_str().starts_with("BEGIN:VCARD\r\nVERSION:3.0\r\n"));
//! ```
//!
//! ## Features
//!
//! - Line folding at 75 octets (UTF-8 safe), with either terminator
//! - Text escaping of backslash, semicolon, comma and newlines
//! - RFC 6868 caret encoding for parameters
//! - Properties emitted in insertion order

mod escape;
mod fold;
mod payload;
mod serializer;

pub use escape::{escape_param_value, escape_text};
pub use fold::{DEFAULT_FOLD_WIDTH, fold_line};
pub use payload::EncodedPayload;
pub use serializer::{serialize, serialize_property};
