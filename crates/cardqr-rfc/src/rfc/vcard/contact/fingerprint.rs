//! PGP key fingerprint normalization.

use crate::error::{RfcError, RfcResult};

/// How much of the key a fingerprint identifies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FingerprintStrength {
    /// 8 hex characters (short key ID). Collision-prone.
    Weak,
    /// 16 hex characters (long key ID).
    Long,
    /// 40 hex characters (full v4 fingerprint).
    Full,
}

/// A normalized key fingerprint.
///
/// Separators and whitespace are discarded on parse; the hex form is always
/// uppercase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFingerprint {
    bytes: Vec<u8>,
}

impl KeyFingerprint {
    /// Parses a fingerprint, ignoring every non-hex character.
    ///
    /// ## Errors
    /// Returns [`RfcError::InvalidFingerprint`] unless 8, 16 or 40 hex
    /// characters remain.
    pub fn parse(input: &str) -> RfcResult<Self> {
        let digits: String = input
            .chars()
            .filter(char::is_ascii_hexdigit)
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !matches!(digits.len(), 8 | 16 | 40) {
            return Err(RfcError::InvalidFingerprint(format!(
                "expected 8, 16 or 40 hex characters, found {}",
                digits.len()
            )));
        }

        let bytes =
            hex::decode(&digits).map_err(|e| RfcError::InvalidFingerprint(e.to_string()))?;

        Ok(Self { bytes })
    }

    /// Uppercase hex form, as written to `X-PGP-FP`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex::encode_upper(&self.bytes)
    }

    /// Number of hex characters.
    #[must_use]
    pub fn hex_len(&self) -> usize {
        self.bytes.len() * 2
    }

    #[must_use]
    pub fn strength(&self) -> FingerprintStrength {
        match self.hex_len() {
            8 => FingerprintStrength::Weak,
            16 => FingerprintStrength::Long,
            _ => FingerprintStrength::Full,
        }
    }
}

impl std::fmt::Display for KeyFingerprint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_fingerprint_with_separators() {
        let fp = KeyFingerprint::parse("AB:CD:EF:01:23:45:67:89:AB:CD:EF:01:23:45:67:89:AB:CD:EF:01")
            .expect("40 hex digits should parse");

        assert_eq!(fp.to_hex(), "ABCDEF0123456789ABCDEF0123456789ABCDEF01");
        assert_eq!(fp.hex_len(), 40);
        assert_eq!(fp.strength(), FingerprintStrength::Full);
    }

    #[test]
    fn lowercase_is_uppercased() {
        let fp = KeyFingerprint::parse("dead beef cafe f00d").expect("16 hex digits");
        assert_eq!(fp.to_string(), "DEADBEEFCAFEF00D");
    }

    #[test]
    fn hex_prefix_digit_counts() {
        // The "0" of "0x" is a hex digit and pushes the length to 17.
        assert!(KeyFingerprint::parse("0xdeadbeefcafef00d").is_err());
    }

    #[test]
    fn non_hex_only_is_rejected() {
        assert!(matches!(
            KeyFingerprint::parse("zz"),
            Err(RfcError::InvalidFingerprint(_))
        ));
        assert!(matches!(
            KeyFingerprint::parse(" : "),
            Err(RfcError::InvalidFingerprint(_))
        ));
    }

    #[test]
    fn wrong_length_is_rejected() {
        assert!(matches!(
            KeyFingerprint::parse("1234567"),
            Err(RfcError::InvalidFingerprint(_))
        ));
        assert!(KeyFingerprint::parse(&"A".repeat(32)).is_err());
    }

    #[test]
    fn short_and_long_key_ids() {
        let short = KeyFingerprint::parse("89ab cdef").expect("8 hex digits");
        assert_eq!(short.to_hex(), "89ABCDEF");
        assert_eq!(short.strength(), FingerprintStrength::Weak);

        let long = KeyFingerprint::parse("0123-4567-89ab-cdef").expect("16 hex digits");
        assert_eq!(long.strength(), FingerprintStrength::Long);
        assert_eq!(long.hex_len(), 16);
    }
}
