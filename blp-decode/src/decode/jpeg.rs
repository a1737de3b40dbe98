//! Adapter around the delegated JPEG codec.

use crate::error::Result;
use crate::types::PixelBuffer;
use image::{ImageFormat, ImageReader};
use std::io::Cursor;

/// Decode one mip level's JPEG stream. `BLP1` stores the bytes common to
/// all levels once in the header, so the shared blob is prepended to the
/// payload before handing the stream to the codec.
pub(super) fn decode(shared_header: &[u8], payload: &[u8]) -> Result<PixelBuffer> {
    let mut stream = Vec::with_capacity(shared_header.len() + payload.len());
    stream.extend_from_slice(shared_header);
    stream.extend_from_slice(payload);

    let decoded = ImageReader::with_format(Cursor::new(stream), ImageFormat::Jpeg).decode()?;
    let rgba = decoded.into_rgba8();
    let (width, height) = rgba.dimensions();

    // The embedded stream stores red and blue swapped, so the codec's RGBA
    // bytes already sit in blue/green/red order; only alpha needs forcing.
    // Rows come back top to bottom, matching the canonical buffer order.
    let mut data = rgba.into_raw();
    for pixel in data.chunks_exact_mut(4) {
        pixel[3] = 0xFF;
    }
    Ok(PixelBuffer::new(width, height, data))
}
