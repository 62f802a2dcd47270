//! Value text transforms
//!
//! Value payloads are stored as UTF-16LE with each byte inverted
//! (`b -> 255 - b`). Inversion is undone before UTF-16 decoding, so surrogate
//! validation always sees the real code units.

use std::borrow::Cow;

use crate::error::FormatError;

/// Escape sequence standing in for a literal newline in decoded values.
pub const NEWLINE_ESCAPE: &str = "\\n";

/// Invert a single payload byte. Applying it twice yields the input.
#[inline]
#[must_use]
pub const fn invert_byte(byte: u8) -> u8 {
    !byte
}

/// Invert every byte of a payload in place.
pub fn invert_bytes(bytes: &mut [u8]) {
    for byte in bytes {
        *byte = invert_byte(*byte);
    }
}

/// Replace literal newlines with the two-character `\n` escape.
#[must_use]
pub fn escape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains('\n') {
        Cow::Owned(text.replace('\n', NEWLINE_ESCAPE))
    } else {
        Cow::Borrowed(text)
    }
}

/// Turn `\n` escapes back into literal newlines.
#[must_use]
pub fn unescape_newlines(text: &str) -> Cow<'_, str> {
    if text.contains(NEWLINE_ESCAPE) {
        Cow::Owned(text.replace(NEWLINE_ESCAPE, "\n"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Decode an inverted UTF-16LE payload into escaped text.
///
/// `offset` is only used for error reporting.
///
/// # Errors
/// Returns [`FormatError::InvalidTextEncoding`] if the payload has an odd
/// length or contains an unpaired surrogate.
pub fn decode_payload(payload: &[u8], offset: usize) -> Result<String, FormatError> {
    if payload.len() % 2 != 0 {
        return Err(FormatError::InvalidTextEncoding {
            offset,
            message: format!("{} bytes do not form whole UTF-16 code units", payload.len()),
        });
    }

    let units = payload
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([invert_byte(pair[0]), invert_byte(pair[1])]));

    let text = char::decode_utf16(units)
        .collect::<Result<String, _>>()
        .map_err(|e| FormatError::InvalidTextEncoding {
            offset,
            message: format!("unpaired surrogate {:#06x}", e.unpaired_surrogate()),
        })?;

    Ok(escape_newlines(&text).into_owned())
}

/// Encode escaped text into an inverted UTF-16LE payload.
///
/// Returns the number of UTF-16 code units alongside the payload bytes.
#[must_use]
pub fn encode_payload(text: &str) -> (usize, Vec<u8>) {
    let raw = unescape_newlines(text);
    let mut units = 0usize;
    let mut payload = Vec::with_capacity(raw.len() * 2);

    for unit in raw.encode_utf16() {
        payload.extend_from_slice(&unit.to_le_bytes());
        units += 1;
    }
    invert_bytes(&mut payload);

    (units, payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_is_involution() {
        for byte in 0..=u8::MAX {
            assert_eq!(invert_byte(invert_byte(byte)), byte);
            assert_eq!(invert_byte(byte), 255 - byte);
        }
    }

    #[test]
    fn test_invert_bytes_in_place() {
        let mut bytes = vec![0x00, 0xFF, 0x48, 0xB7];
        invert_bytes(&mut bytes);
        assert_eq!(bytes, vec![0xFF, 0x00, 0xB7, 0x48]);
        invert_bytes(&mut bytes);
        assert_eq!(bytes, vec![0x00, 0xFF, 0x48, 0xB7]);
    }

    #[test]
    fn test_escape_unescape() {
        assert_eq!(escape_newlines("a\nb\nc"), "a\\nb\\nc");
        assert_eq!(unescape_newlines("a\\nb\\nc"), "a\nb\nc");
        assert!(matches!(escape_newlines("plain"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_payload_layout() {
        let (units, payload) = encode_payload("Hi\\n");
        assert_eq!(units, 3);
        // 'H' = 0x0048, 'i' = 0x0069, '\n' = 0x000A, each byte inverted
        assert_eq!(payload, vec![0xB7, 0xFF, 0x96, 0xFF, 0xF5, 0xFF]);
        assert_eq!(decode_payload(&payload, 0).unwrap(), "Hi\\n");
    }

    #[test]
    fn test_non_bmp_text() {
        let (units, payload) = encode_payload("兵营 🚀");
        assert_eq!(units, 5);
        assert_eq!(decode_payload(&payload, 0).unwrap(), "兵营 🚀");
    }

    #[test]
    fn test_unpaired_surrogate_rejected() {
        // lone high surrogate 0xD800, stored inverted
        let payload = [!0x00u8, !0xD8u8];
        let err = decode_payload(&payload, 12).unwrap_err();
        assert!(matches!(err, FormatError::InvalidTextEncoding { offset: 12, .. }));
    }

    #[test]
    fn test_odd_payload_rejected() {
        let err = decode_payload(&[0xFF, 0xFF, 0xFF], 0).unwrap_err();
        assert!(matches!(err, FormatError::InvalidTextEncoding { .. }));
    }
}
