//! Unpack routines for palette-indexed payloads.
//!
//! All of them share one payload shape: an index plane of one byte per
//! pixel, optionally followed by a packed alpha plane in raster order. The
//! packed planes are walked with [`PlaneCursor`], an explicit byte/bit
//! position advanced per pixel instead of a hidden mutable counter.

use crate::error::{Error, Result};
use crate::types::{Palette, PixelBuffer};

/// Position inside a packed alpha plane. Reads return the value together
/// with the advanced cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PlaneCursor {
    byte: usize,
    bit: u8,
}

impl PlaneCursor {
    fn start() -> Self {
        Self { byte: 0, bit: 0 }
    }

    /// Read one bit, least significant first within each byte.
    fn read_bit(self, plane: &[u8]) -> (u8, Self) {
        let value = (plane[self.byte] >> self.bit) & 1;
        let next = if self.bit == 7 {
            Self {
                byte: self.byte + 1,
                bit: 0,
            }
        } else {
            Self {
                byte: self.byte,
                bit: self.bit + 1,
            }
        };
        (value, next)
    }

    /// Read one nibble, low nibble first within each byte.
    fn read_nibble(self, plane: &[u8]) -> (u8, Self) {
        let value = (plane[self.byte] >> self.bit) & 0xF;
        let next = if self.bit == 0 {
            Self {
                byte: self.byte,
                bit: 4,
            }
        } else {
            Self {
                byte: self.byte + 1,
                bit: 0,
            }
        };
        (value, next)
    }
}

/// Widen a 4-bit alpha value to the full 8-bit range.
fn expand_nibble(value: u8) -> u8 {
    (value << 4) | value
}

/// Split a payload into the index plane and the alpha plane, verifying the
/// total size the format requires.
fn split_planes<'a>(
    payload: &'a [u8],
    pixels: usize,
    alpha_len: usize,
    level: usize,
) -> Result<(&'a [u8], &'a [u8])> {
    let expected = pixels + alpha_len;
    if payload.len() < expected {
        return Err(Error::TruncatedPayload {
            level,
            expected,
            actual: payload.len(),
        });
    }
    Ok((&payload[..pixels], &payload[pixels..expected]))
}

pub(super) fn no_alpha(
    colors: &Palette,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let pixels = (width as usize) * (height as usize);
    let (indices, _) = split_planes(payload, pixels, 0, level)?;

    let mut data = Vec::with_capacity(pixels * 4);
    for &index in indices {
        let color = colors.color(index);
        data.extend_from_slice(&[color.b, color.g, color.r, 0xFF]);
    }
    Ok(PixelBuffer::new(width, height, data))
}

pub(super) fn alpha8(
    colors: &Palette,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let pixels = (width as usize) * (height as usize);
    let (indices, alpha_plane) = split_planes(payload, pixels, pixels, level)?;

    let mut data = Vec::with_capacity(pixels * 4);
    for (&index, &alpha) in indices.iter().zip(alpha_plane) {
        let color = colors.color(index);
        data.extend_from_slice(&[color.b, color.g, color.r, alpha]);
    }
    Ok(PixelBuffer::new(width, height, data))
}

/// Legacy `BLP1` sub-encoding: no alpha plane at all. Alpha comes from the
/// palette entry's own alpha channel, inverted.
pub(super) fn alpha8_from_palette(
    colors: &Palette,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let pixels = (width as usize) * (height as usize);
    let (indices, _) = split_planes(payload, pixels, 0, level)?;

    let mut data = Vec::with_capacity(pixels * 4);
    for &index in indices {
        let color = colors.color(index);
        data.extend_from_slice(&[color.b, color.g, color.r, 0xFF - color.a]);
    }
    Ok(PixelBuffer::new(width, height, data))
}

pub(super) fn alpha1(
    colors: &Palette,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let pixels = (width as usize) * (height as usize);
    let (indices, alpha_plane) = split_planes(payload, pixels, pixels.div_ceil(8), level)?;

    let mut data = Vec::with_capacity(pixels * 4);
    let mut cursor = PlaneCursor::start();
    for &index in indices {
        let (bit, next) = cursor.read_bit(alpha_plane);
        cursor = next;
        let color = colors.color(index);
        data.extend_from_slice(&[color.b, color.g, color.r, if bit != 0 { 0xFF } else { 0x00 }]);
    }
    Ok(PixelBuffer::new(width, height, data))
}

pub(super) fn alpha4(
    colors: &Palette,
    payload: &[u8],
    width: u32,
    height: u32,
    level: usize,
) -> Result<PixelBuffer> {
    let pixels = (width as usize) * (height as usize);
    let (indices, alpha_plane) = split_planes(payload, pixels, pixels.div_ceil(2), level)?;

    let mut data = Vec::with_capacity(pixels * 4);
    let mut cursor = PlaneCursor::start();
    for &index in indices {
        let (nibble, next) = cursor.read_nibble(alpha_plane);
        cursor = next;
        let color = colors.color(index);
        data.extend_from_slice(&[color.b, color.g, color.r, expand_nibble(nibble)]);
    }
    Ok(PixelBuffer::new(width, height, data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Bgra;
    use pretty_assertions::assert_eq;

    fn test_palette() -> Palette {
        let mut colors = [Bgra::default(); 256];
        for (i, color) in colors.iter_mut().enumerate() {
            *color = Bgra {
                b: i as u8,
                g: (i as u8).wrapping_mul(2),
                r: (i as u8).wrapping_mul(3),
                a: 255 - i as u8,
            };
        }
        Palette::new(colors)
    }

    #[test]
    fn bit_cursor_is_lsb_first() {
        let plane = [0b0101_0101u8, 0b0000_0011];
        let mut cursor = PlaneCursor::start();
        let mut bits = Vec::new();
        for _ in 0..16 {
            let (bit, next) = cursor.read_bit(&plane);
            bits.push(bit);
            cursor = next;
        }
        assert_eq!(bits, vec![1, 0, 1, 0, 1, 0, 1, 0, 1, 1, 0, 0, 0, 0, 0, 0]);
        assert_eq!(cursor, PlaneCursor { byte: 2, bit: 0 });
    }

    #[test]
    fn nibble_cursor_is_low_first() {
        let plane = [0xF8u8, 0x08];
        let mut cursor = PlaneCursor::start();
        let mut nibbles = Vec::new();
        for _ in 0..4 {
            let (nibble, next) = cursor.read_nibble(&plane);
            nibbles.push(nibble);
            cursor = next;
        }
        assert_eq!(nibbles, vec![0x8, 0xF, 0x8, 0x0]);
    }

    #[test]
    fn nibble_expansion_covers_the_full_range() {
        assert_eq!(expand_nibble(0x0), 0x00);
        assert_eq!(expand_nibble(0x8), 0x88);
        assert_eq!(expand_nibble(0xF), 0xFF);
    }

    #[test]
    fn no_alpha_forces_opaque_pixels() {
        let buffer = no_alpha(&test_palette(), &[1, 2, 3, 4], 4, 1, 0).expect("decode");
        assert_eq!(buffer.as_bytes().len(), 16);
        for x in 0..4 {
            assert_eq!(buffer.pixel(x, 0).a, 0xFF);
        }
        assert_eq!(buffer.pixel(2, 0).b, 3);
    }

    #[test]
    fn inverted_palette_alpha() {
        let buffer = alpha8_from_palette(&test_palette(), &[10], 1, 1, 0).expect("decode");
        // Palette alpha at index 10 is 245, inverted to 10.
        assert_eq!(buffer.pixel(0, 0).a, 10);
    }

    #[test]
    fn separate_alpha_plane() {
        let buffer = alpha8(&test_palette(), &[1, 2, 200, 7], 2, 1, 0).expect("decode");
        assert_eq!(buffer.pixel(0, 0).a, 200);
        assert_eq!(buffer.pixel(1, 0).a, 7);
        assert_eq!(buffer.pixel(1, 0).b, 2);
    }

    #[test]
    fn short_alpha_plane_is_truncated_payload() {
        // 4 pixels of 4-bit alpha need 4 + 2 bytes; give 5.
        let err = alpha4(&test_palette(), &[0; 5], 4, 1, 2).expect_err("short plane");
        assert!(matches!(
            err,
            Error::TruncatedPayload {
                level: 2,
                expected: 6,
                actual: 5
            }
        ));
    }
}
