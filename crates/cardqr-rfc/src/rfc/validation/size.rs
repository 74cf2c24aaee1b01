//! QR payload size policy.
//!
//! ## Summary
//! Byte-mode QR codes top out at 2953 bytes (version 40, level L), and
//! phone cameras struggle well before that. Payloads above
//! [`WARN_PAYLOAD_BYTES`] are allowed with a warning; payloads above
//! [`MAX_PAYLOAD_BYTES`] are refused.

use crate::error::{RfcError, RfcResult};
use crate::rfc::vcard::EncodedPayload;

/// Size above which a dense-symbol warning is logged.
pub const WARN_PAYLOAD_BYTES: usize = 2000;

/// Size above which the payload is rejected.
pub const MAX_PAYLOAD_BYTES: usize = 2950;

/// Outcome of checking a payload against the size thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeVerdict {
    Ok { size: usize },
    Warn { size: usize },
    Reject { size: usize },
}

impl SizeVerdict {
    /// Classifies a payload length in bytes.
    #[must_use]
    pub const fn classify(size: usize) -> Self {
        if size > MAX_PAYLOAD_BYTES {
            Self::Reject { size }
        } else if size > WARN_PAYLOAD_BYTES {
            Self::Warn { size }
        } else {
            Self::Ok { size }
        }
    }

    /// Measured size in bytes.
    #[must_use]
    pub const fn size(self) -> usize {
        match self {
            Self::Ok { size } | Self::Warn { size } | Self::Reject { size } => size,
        }
    }
}

/// Checks the UTF-8 byte length of `payload` against the thresholds.
///
/// Logs a warning for oversized-but-accepted payloads; the payload itself
/// is never altered.
///
/// ## Errors
/// Returns [`RfcError::PayloadTooLarge`] carrying the measured size when the
/// payload exceeds [`MAX_PAYLOAD_BYTES`].
pub fn validate_payload_size(payload: &EncodedPayload) -> RfcResult<SizeVerdict> {
    let verdict = SizeVerdict::classify(payload.byte_len());

    match verdict {
        SizeVerdict::Reject { size } => Err(RfcError::PayloadTooLarge {
            size,
            limit: MAX_PAYLOAD_BYTES,
        }),
        SizeVerdict::Warn { size } => {
            tracing::warn!(
                size,
                threshold = WARN_PAYLOAD_BYTES,
                "vCard payload is large; the QR code may be too dense for some scanners"
            );
            Ok(verdict)
        }
        SizeVerdict::Ok { .. } => Ok(verdict),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardqr_core::types::LineEnding;
    use std::sync::{Arc, Mutex};

    /// Shared buffer the fmt layer writes log lines into.
    #[derive(Clone, Default)]
    struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().expect("log buffer").extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    impl CapturedLogs {
        fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().expect("log buffer")).into_owned()
        }

        fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
            let writer = self.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_ansi(false)
                .with_max_level(tracing::Level::WARN)
                .with_writer(move || writer.clone())
                .finish();
            tracing::subscriber::with_default(subscriber, f)
        }
    }

    fn payload_of(size: usize) -> EncodedPayload {
        EncodedPayload::from_text("x".repeat(size), LineEnding::Crlf)
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(SizeVerdict::classify(0), SizeVerdict::Ok { size: 0 });
        assert_eq!(SizeVerdict::classify(2000), SizeVerdict::Ok { size: 2000 });
        assert_eq!(SizeVerdict::classify(2001), SizeVerdict::Warn { size: 2001 });
        assert_eq!(SizeVerdict::classify(2950), SizeVerdict::Warn { size: 2950 });
        assert_eq!(SizeVerdict::classify(2951), SizeVerdict::Reject { size: 2951 });
    }

    #[test_log::test]
    fn oversized_payload_is_rejected_with_size() {
        let err = validate_payload_size(&payload_of(3000)).unwrap_err();

        assert!(matches!(
            err,
            RfcError::PayloadTooLarge {
                size: 3000,
                limit: MAX_PAYLOAD_BYTES
            }
        ));
    }

    #[test]
    fn large_payload_warns_without_error() {
        let logs = CapturedLogs::default();
        let verdict = logs
            .capture(|| validate_payload_size(&payload_of(2500)))
            .expect("2500 bytes is allowed");

        assert_eq!(verdict, SizeVerdict::Warn { size: 2500 });
        assert_eq!(verdict.size(), 2500);

        let output = logs.contents();
        assert!(output.contains("WARN"), "{output}");
        assert!(output.contains("size=2500"), "{output}");
    }

    #[test]
    fn small_payload_logs_nothing() {
        let logs = CapturedLogs::default();
        logs.capture(|| validate_payload_size(&payload_of(1999)))
            .expect("1999 bytes is allowed");

        assert!(logs.contents().is_empty());
    }

    #[test]
    fn multibyte_characters_count_as_bytes() {
        // 700 four-byte characters: 700 chars, 2800 bytes.
        let payload = EncodedPayload::from_text("🦀".repeat(700), LineEnding::Lf);

        assert_eq!(
            validate_payload_size(&payload).ok(),
            Some(SizeVerdict::Warn { size: 2800 })
        );
    }

    #[test]
    fn small_payload_is_ok() {
        assert_eq!(
            validate_payload_size(&payload_of(120)).ok(),
            Some(SizeVerdict::Ok { size: 120 })
        );
    }
}
