//! Data-URI decoding for camera captures.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use pantry_core::{DomainError, DomainResult};

/// Payload is decoded in slices of this many base64 characters. A
/// multiple of 4, so every non-final slice is a self-contained block and
/// the concatenated output is bit-identical to a one-shot decode.
const DECODE_CHUNK_CHARS: usize = 512;

/// A decoded capture, held only between capture and upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub bytes: Vec<u8>,
    pub mime_type: String,
}

/// Decode a `data:<mime>;base64,<payload>` URI into raw bytes plus the
/// MIME type taken from the header segment.
///
/// Pure and synchronous; any other URI shape is `InvalidInput`, and
/// payload characters outside the base64 alphabet are `Decode`.
pub fn decode(data_uri: &str) -> DomainResult<CapturedImage> {
    let rest = data_uri
        .strip_prefix("data:")
        .ok_or_else(|| DomainError::invalid_input("expected a data: URI"))?;

    let (mime_type, rest) = rest
        .split_once(';')
        .ok_or_else(|| DomainError::invalid_input("missing ';' separator in data URI header"))?;
    if mime_type.is_empty() {
        return Err(DomainError::invalid_input("missing MIME type in data URI"));
    }

    let payload = rest
        .strip_prefix("base64,")
        .ok_or_else(|| DomainError::invalid_input("data URI is not base64-encoded"))?;

    let mut bytes = Vec::with_capacity(payload.len() / 4 * 3);
    let chars: Vec<char> = payload.chars().collect();
    for chunk in chars.chunks(DECODE_CHUNK_CHARS) {
        let slice: String = chunk.iter().collect();
        let decoded = STANDARD
            .decode(slice.as_bytes())
            .map_err(|e| DomainError::decode(e.to_string()))?;
        bytes.extend_from_slice(&decoded);
    }

    Ok(CapturedImage {
        bytes,
        mime_type: mime_type.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn data_uri(mime: &str, bytes: &[u8]) -> String {
        format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
    }

    #[test]
    fn round_trips_a_known_byte_sequence() {
        let original: Vec<u8> = (0u8..=255).collect();
        let image = decode(&data_uri("image/png", &original)).unwrap();
        assert_eq!(image.bytes, original);
        assert_eq!(image.mime_type, "image/png");
    }

    #[test]
    fn decodes_payloads_larger_than_one_chunk() {
        // Three full 512-char chunks plus a padded tail.
        let original: Vec<u8> = (0..1000).map(|i| (i % 251) as u8).collect();
        let image = decode(&data_uri("image/jpeg", &original)).unwrap();
        assert_eq!(image.bytes, original);
    }

    #[test]
    fn rejects_non_data_uris() {
        for input in ["https://example.com/a.png", "", "image/png;base64,AAAA"] {
            let err = decode(input).unwrap_err();
            assert!(matches!(err, DomainError::InvalidInput(_)), "{input:?}");
        }
    }

    #[test]
    fn rejects_missing_base64_marker() {
        let err = decode("data:image/png;utf8,hello").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn rejects_missing_mime_type() {
        let err = decode("data:;base64,AAAA").unwrap_err();
        assert!(matches!(err, DomainError::InvalidInput(_)));
    }

    #[test]
    fn rejects_characters_outside_the_base64_alphabet() {
        let err = decode("data:image/png;base64,AA!A").unwrap_err();
        assert!(matches!(err, DomainError::Decode(_)));
    }

    proptest! {
        #[test]
        fn chunked_decode_matches_one_shot_decode(bytes in proptest::collection::vec(any::<u8>(), 0..2048)) {
            let encoded = STANDARD.encode(&bytes);
            let image = decode(&format!("data:image/jpeg;base64,{encoded}")).unwrap();
            prop_assert_eq!(image.bytes, STANDARD.decode(&encoded).unwrap());
        }
    }
}
