//! Core vCard types.

mod parameter;
mod property;
mod value;
mod vcard;

pub use parameter::{VCardParameter, types};
pub use property::{VCardProperty, names};
pub use value::VCardValue;
pub use vcard::{VCard, VCardVersion};
