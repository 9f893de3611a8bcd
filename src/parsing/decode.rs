//! Lenient decoding of uploaded chat exports.

use tracing::warn;

/// Decoded export text plus the number of invalid byte sequences dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedInput {
    /// Valid UTF-8 text with invalid sequences removed
    pub text: String,
    /// Number of invalid byte sequences that were dropped
    pub dropped_sequences: usize,
}

impl DecodedInput {
    /// Returns `true` if any bytes were dropped during decoding.
    pub fn has_warnings(&self) -> bool {
        self.dropped_sequences > 0
    }
}

/// Decodes bytes as UTF-8, silently dropping invalid sequences.
///
/// Unlike [`String::from_utf8_lossy`] no replacement character is
/// inserted; the invalid bytes simply disappear. A leading byte-order mark
/// is stripped.
///
/// ```rust
/// use chatpulse::parsing::decode_lossy;
///
/// let decoded = decode_lossy(b"caf\xC3\xA9 \xFF\xFEok");
/// assert_eq!(decoded.text, "café ok");
/// assert_eq!(decoded.dropped_sequences, 2);
/// ```
pub fn decode_lossy(bytes: &[u8]) -> DecodedInput {
    let mut text = String::with_capacity(bytes.len());
    let mut dropped_sequences = 0;

    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
        if !chunk.invalid().is_empty() {
            dropped_sequences += 1;
        }
    }

    if text.starts_with('\u{feff}') {
        text.remove(0);
    }

    if dropped_sequences > 0 {
        warn!(dropped_sequences, "dropped invalid UTF-8 sequences from input");
    }

    DecodedInput {
        text,
        dropped_sequences,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_input_untouched() {
        let decoded = decode_lossy("[2024-01-01, 10:00:00] Алиса: привет 👋".as_bytes());
        assert_eq!(decoded.text, "[2024-01-01, 10:00:00] Алиса: привет 👋");
        assert!(!decoded.has_warnings());
    }

    #[test]
    fn test_invalid_bytes_dropped_without_replacement() {
        let decoded = decode_lossy(b"hi\x80there");
        assert_eq!(decoded.text, "hithere");
        assert!(!decoded.text.contains('\u{fffd}'));
        assert_eq!(decoded.dropped_sequences, 1);
    }

    #[test]
    fn test_truncated_multibyte_at_end() {
        // First two bytes of a three-byte sequence
        let decoded = decode_lossy(b"ok\xE2\x82");
        assert_eq!(decoded.text, "ok");
        assert!(decoded.has_warnings());
    }

    #[test]
    fn test_bom_stripped() {
        let decoded = decode_lossy(b"\xEF\xBB\xBFhello");
        assert_eq!(decoded.text, "hello");
    }

    #[test]
    fn test_empty() {
        let decoded = decode_lossy(b"");
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.dropped_sequences, 0);
    }
}
