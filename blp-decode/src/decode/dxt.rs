//! Adapter around the DXT block-decompression codec.

use crate::error::{Error, Result};
use crate::types::PixelBuffer;

/// Decompress a BC1/BC2/BC3 block stream and reorder the codec's RGBA
/// output into the canonical BGRA layout.
pub(super) fn decode(
    format: texpresso::Format,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let (w, h) = (width as usize, height as usize);
    let expected = format.compressed_size(w, h);
    if payload.len() < expected {
        return Err(Error::TruncatedPayload {
            level,
            expected,
            actual: payload.len(),
        });
    }

    let mut pixels = vec![0u8; w * h * 4];
    format.decompress(&payload[..expected], w, h, &mut pixels);
    for pixel in pixels.chunks_exact_mut(4) {
        pixel.swap(0, 2);
    }
    Ok(PixelBuffer::new(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;

    // A single BC1 block: both endpoint colors 0xF800 (pure red), all
    // indices pointing at endpoint 0.
    const SOLID_RED_BLOCK: [u8; 8] = [0x00, 0xF8, 0x00, 0xF8, 0, 0, 0, 0];

    #[test]
    fn solid_block_decodes_to_bgra() {
        let buffer = decode(texpresso::Format::Bc1, &SOLID_RED_BLOCK, 4, 4, 0).expect("decode");
        for y in 0..4 {
            for x in 0..4 {
                let pixel = buffer.pixel(x, y);
                assert_eq!((pixel.b, pixel.g, pixel.r, pixel.a), (0, 0, 255, 255));
            }
        }
    }

    #[test]
    fn undersized_block_stream_fails() {
        let err = decode(texpresso::Format::Bc3, &SOLID_RED_BLOCK, 4, 4, 1).expect_err("short");
        assert!(matches!(
            err,
            Error::TruncatedPayload {
                level: 1,
                expected: 16,
                actual: 8
            }
        ));
    }
}
