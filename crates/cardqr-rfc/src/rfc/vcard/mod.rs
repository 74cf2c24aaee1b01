//! vCard 3.0 contact records.
//!
//! This module builds the single contact record that ends up inside the QR
//! code, and serializes it with escaping and line folding.
//!
//! ## Usage
//!
//! ```rust
//! use cardqr_core::config::ContactConfig;
//! use cardqr_core::types::LineEnding;
//! use cardqr_rfc::rfc::vcard::encode_contact;
//!
//! let contact = ContactConfig {
//!     name: "Alice Example".into(),
//!     github: "alice".into(),
//!     ..ContactConfig::default()
//! };
//!
//! let payload = encode_contact(&contact, LineEnding::Crlf).unwrap();
//! assert!(payload.as_str().contains("URL:https://github.com/alice\r\n"));
//! ```
//!
//! ## Submodules
//!
//! - [`core`] - Core types (`VCard`, `VCardProperty`, `VCardValue`, etc.)
//! - [`build`] - Escaping, folding and serialization
//! - [`contact`] - Contact builder, name resolution, URI and fingerprint checks
//! - [`parse`] - Unescaping and unfolding

pub mod build;
pub mod contact;
pub mod core;
pub mod parse;

// Re-export commonly used types
pub use build::{EncodedPayload, escape_text, fold_line, serialize};
pub use contact::{KeyFingerprint, build_vcard, encode_contact};
pub use self::core::{VCard, VCardParameter, VCardProperty, VCardValue, VCardVersion};
pub use parse::{unescape_text, unfold};
