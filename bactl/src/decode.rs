//! Base64 payload decoding.

use base64::{Engine as _, engine::general_purpose};

use crate::errors::Result;

/// Decode a base64 file payload into an owned byte buffer.
///
/// Clients line-wrap large payloads, so embedded ASCII whitespace (spaces, tabs, CR/LF) is
/// skipped before decoding. Any other character outside the standard alphabet is an error.
pub fn decode_file_payload(payload: &str) -> Result<Vec<u8>> {
    let compact: String = payload.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(general_purpose::STANDARD.decode(compact)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    #[test]
    fn test_decode_valid_payload() {
        let decoded = decode_file_payload("aGVsbG8gd29ybGQ=").unwrap();
        assert_eq!(decoded, b"hello world");
    }

    #[test]
    fn test_line_wrapped_payload_decodes_like_compact_form() {
        let data: Vec<u8> = (0..=255u8).collect();
        let compact = general_purpose::STANDARD.encode(&data);

        // Re-wrap at 64 columns the way MIME-style encoders emit payloads
        let wrapped: String = compact
            .as_bytes()
            .chunks(64)
            .map(|line| std::str::from_utf8(line).unwrap())
            .collect::<Vec<_>>()
            .join("\r\n");

        assert_eq!(decode_file_payload(&wrapped).unwrap(), data);
        assert_eq!(decode_file_payload(&compact).unwrap(), data);
    }

    #[test]
    fn test_invalid_characters_are_rejected() {
        let err = decode_file_payload("not*valid*base64!").unwrap_err();
        assert!(matches!(err, Error::InvalidBase64(_)));
        assert_eq!(err.status_code(), 400);
    }

    #[test]
    fn test_truncated_payload_is_rejected() {
        // A single trailing symbol can never form a valid final quantum
        let err = decode_file_payload("aGVsbG8gd29ybGQ=a").unwrap_err();
        assert!(matches!(err, Error::InvalidBase64(_)));
    }
}
