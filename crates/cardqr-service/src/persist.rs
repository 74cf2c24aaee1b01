//! Whole-file writes for generated artifacts.
//!
//! Bytes are written exactly as produced: the record keeps whichever line
//! terminator it was serialized with.

use std::path::Path;

use cardqr_rfc::rfc::vcard::EncodedPayload;

use crate::barcode::SvgImage;
use crate::error::{ServiceError, ServiceResult};

/// ## Summary
/// Writes the rendered QR image, replacing any existing file.
///
/// ## Errors
/// Returns an I/O error naming `path` if the file cannot be written.
pub fn write_image(path: &Path, image: &SvgImage) -> ServiceResult<()> {
    write_bytes(path, image.as_str().as_bytes())?;
    tracing::info!(path = %path.display(), "Saved QR SVG");
    Ok(())
}

/// ## Summary
/// Writes the raw vCard text byte-for-byte, replacing any existing file.
///
/// ## Errors
/// Returns an I/O error naming `path` if the file cannot be written.
pub fn write_record(path: &Path, payload: &EncodedPayload) -> ServiceResult<()> {
    write_bytes(path, payload.as_bytes())?;
    tracing::info!(
        path = %path.display(),
        line_ending = %payload.line_ending(),
        "Saved vCard (.vcf)"
    );
    Ok(())
}

fn write_bytes(path: &Path, bytes: &[u8]) -> ServiceResult<()> {
    std::fs::write(path, bytes).map_err(|source| ServiceError::IoError {
        path: path.to_path_buf(),
        source,
    })
}
