//! Payload validation ahead of barcode generation.

mod size;

pub use size::{MAX_PAYLOAD_BYTES, SizeVerdict, WARN_PAYLOAD_BYTES, validate_payload_size};
