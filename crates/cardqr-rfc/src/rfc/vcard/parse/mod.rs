//! Inverses of the serializer's text transforms.
//!
//! These undo folding and escaping so generated payloads can be checked
//! against the values that went in.

mod lexer;
mod values;

pub use lexer::unfold;
pub use values::unescape_text;
