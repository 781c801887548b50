//! Text to message bytes under a named character encoding

use encoding_rs::{Encoding, UTF_8, UTF_16BE, UTF_16LE};

use crate::error::{HashError, Result};

/// Encoding used when none is configured
pub const DEFAULT_TEXT_ENCODING: &str = "utf-8";

/// Resolve a WHATWG encoding label such as `"utf-8"`, `"latin1"` or
/// `"shift_jis"`.
///
/// # Errors
///
/// Returns [`HashError::Encoding`] when the label is unknown.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| HashError::encoding(label, "unknown encoding label"))
}

/// Convert `text` to the bytes that get hashed.
///
/// # Errors
///
/// Returns [`HashError::Encoding`] when the label is unknown, when the
/// encoding cannot represent a character of `text`, or when the label maps to
/// an encoding that only decodes (such as `iso-2022-kr`).
pub fn encode_text(text: &str, label: &str) -> Result<Vec<u8>> {
    let encoding = resolve_encoding(label)?;

    if encoding == UTF_8 {
        return Ok(text.as_bytes().to_vec());
    }
    if encoding == UTF_16LE {
        return Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect());
    }
    if encoding == UTF_16BE {
        return Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect());
    }

    let (bytes, used, had_errors) = encoding.encode(text);
    if used != encoding {
        return Err(HashError::encoding(
            label,
            format!("{} cannot be used for output", encoding.name()),
        ));
    }
    if had_errors {
        return Err(HashError::encoding(
            label,
            format!("text contains characters not representable in {}", encoding.name()),
        ));
    }
    Ok(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utf8_passes_through() {
        assert_eq!(encode_text("héllo", "UTF-8").unwrap(), "héllo".as_bytes());
        assert_eq!(encode_text("abc", " utf8 ").unwrap(), b"abc");
    }

    #[test]
    fn single_byte_encodings() {
        assert_eq!(encode_text("café", "latin1").unwrap(), [0x63, 0x61, 0x66, 0xe9]);
        assert_eq!(encode_text("Ж", "koi8-r").unwrap(), [0xf6]);
    }

    #[test]
    fn utf16_is_written_directly() {
        assert_eq!(encode_text("A€", "utf-16le").unwrap(), [0x41, 0x00, 0xac, 0x20]);
        assert_eq!(encode_text("A€", "utf-16be").unwrap(), [0x00, 0x41, 0x20, 0xac]);
    }

    #[test]
    fn unmappable_character_is_rejected() {
        let err = encode_text("snow ☃", "windows-1252").unwrap_err();
        assert!(matches!(err, HashError::Encoding { ref encoding, .. } if encoding == "windows-1252"));
    }

    #[test]
    fn unknown_and_decode_only_labels_are_rejected() {
        assert!(matches!(
            encode_text("abc", "ebcdic-37"),
            Err(HashError::Encoding { .. })
        ));
        assert!(matches!(
            encode_text("abc", "iso-2022-kr"),
            Err(HashError::Encoding { .. })
        ));
    }
}
