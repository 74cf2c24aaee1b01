//! End-to-end generation: settings in, SVG (and optionally `.vcf`) out.

use std::path::PathBuf;

use cardqr_core::config::{ContactConfig, Settings};
use cardqr_rfc::rfc::validation::{SizeVerdict, validate_payload_size};
use cardqr_rfc::rfc::vcard::contact::{FingerprintStrength, KeyFingerprint};
use cardqr_rfc::rfc::vcard::encode_contact;

use crate::barcode::BarcodeEmitter;
use crate::error::ServiceResult;
use crate::persist::{write_image, write_record};

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub svg_path: PathBuf,
    /// Set when the raw record was also written.
    pub vcf_path: Option<PathBuf>,
    pub verdict: SizeVerdict,
    pub fingerprint: Option<FingerprintStrength>,
}

impl GenerateReport {
    /// Payload size in bytes.
    #[must_use]
    pub const fn payload_bytes(&self) -> usize {
        self.verdict.size()
    }
}

/// ## Summary
/// Builds the contact record, checks its size, renders it with `emitter` and
/// writes the image, then the raw record if `output.vcf_path` is set.
///
/// Nothing is written unless the record is valid and renders.
///
/// ## Errors
/// Returns the first construction, size, rendering or I/O error encountered.
#[tracing::instrument(skip_all, fields(line_ending = %settings.output.line_ending))]
pub fn generate<E>(settings: &Settings, emitter: &E) -> ServiceResult<GenerateReport>
where
    E: BarcodeEmitter + ?Sized,
{
    let fingerprint = report_fingerprint_strength(&settings.contact)?;

    let payload = encode_contact(&settings.contact, settings.output.line_ending)?;
    let verdict = validate_payload_size(&payload)?;
    tracing::debug!(size = verdict.size(), "vCard payload within limits");

    let image = emitter.render(payload.as_str(), settings.qr.error_correction)?;

    let svg_path = PathBuf::from(&settings.output.svg_path);
    write_image(&svg_path, &image)?;

    let vcf_path = settings
        .output
        .vcf_path
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(PathBuf::from);
    if let Some(path) = &vcf_path {
        write_record(path, &payload)?;
    }

    Ok(GenerateReport {
        svg_path,
        vcf_path,
        verdict,
        fingerprint,
    })
}

/// Flags short key IDs. Weak fingerprints are still accepted.
fn report_fingerprint_strength(
    contact: &ContactConfig,
) -> ServiceResult<Option<FingerprintStrength>> {
    let raw = contact.pgp_fingerprint.trim();
    if raw.is_empty() {
        return Ok(None);
    }

    let fingerprint = KeyFingerprint::parse(raw)?;
    let strength = fingerprint.strength();
    match strength {
        FingerprintStrength::Weak => tracing::warn!(
            fingerprint = %fingerprint,
            "8-hex short key ID is collision-prone; prefer the 16-hex long key ID or the full 40-hex fingerprint"
        ),
        FingerprintStrength::Long => tracing::info!(
            fingerprint = %fingerprint,
            "Using a 16-hex long key ID; include the full fingerprint if possible"
        ),
        FingerprintStrength::Full => {}
    }

    Ok(Some(strength))
}
