//! Unpack routine for uncompressed 32-bit BGRA payloads.

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// The payload already stores blue/green/red/alpha quadruples in raster
/// order, so decoding is a bounds-checked copy.
pub(super) fn bgra(payload: &[u8], width: u32, height: u32, level: usize) -> Result<PixelBuffer> {
    let expected = (width as usize) * (height as usize) * 4;
    if payload.len() < expected {
        return Err(Error::TruncatedPayload {
            level,
            expected,
            actual: payload.len(),
        });
    }
    Ok(PixelBuffer::new(width, height, payload[..expected].to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copies_bytes_unchanged() {
        let payload = [1u8, 2, 3, 4, 5, 6, 7, 8];
        let buffer = bgra(&payload, 2, 1, 0).expect("decode");
        assert_eq!(buffer.as_bytes(), &payload);
    }

    #[test]
    fn trailing_garbage_is_ignored() {
        let buffer = bgra(&[9u8; 9], 1, 1, 0).expect("decode");
        assert_eq!(buffer.as_bytes(), &[9u8; 4]);
    }

    #[test]
    fn short_payload_fails() {
        let err = bgra(&[0u8; 7], 2, 1, 3).expect_err("short payload");
        assert!(matches!(
            err,
            Error::TruncatedPayload {
                level: 3,
                expected: 8,
                actual: 7
            }
        ));
    }
}
