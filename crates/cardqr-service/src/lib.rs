//! QR rendering, file output and the end-to-end generate pipeline.

pub mod barcode;
pub mod error;
pub mod generate;
pub mod persist;
