//! Mip payload unpacking into canonical BGRA buffers.

mod dxt;
mod jpeg;
mod palette;
mod raw;

use crate::error::{Error, Result};
use crate::types::{BlpFormat, BlpHeader, Palette, PixelBuffer};
use log::trace;

/// Decode one mip level of `data` into a fresh [`PixelBuffer`].
///
/// `level` is clamped to the available range, so requesting past the last
/// stored level returns the smallest one rather than failing. Payloads
/// shorter than their format requires fail with
/// [`Error::TruncatedPayload`]; a classified format without an unpack
/// routine fails with [`Error::UnsupportedFormat`].
pub fn decode_mipmap(data: &[u8], header: &BlpHeader, level: usize) -> Result<PixelBuffer> {
    let level = header.mips.clamp_level(level);
    let (width, height) = header.mip_size(level);
    let format = header.format();
    trace!("decoding mip {level} ({width}x{height}) as {format}");

    // Halved dimensions can reach zero for narrow textures at deep levels;
    // such a mip needs no payload bytes at all.
    if width == 0 || height == 0 {
        return Ok(PixelBuffer::new(width, height, Vec::new()));
    }

    let (offset, length) = header.mip_span(level);
    let payload = payload_slice(data, offset, length, level)?;

    match format {
        BlpFormat::Jpeg => jpeg::decode(header.shared_jpeg_header(), payload),
        BlpFormat::PalettedNoAlpha => {
            palette::no_alpha(palette_of(header, format)?, payload, width, height, level)
        }
        BlpFormat::PalettedAlpha1 => {
            palette::alpha1(palette_of(header, format)?, payload, width, height, level)
        }
        BlpFormat::PalettedAlpha4 => {
            palette::alpha4(palette_of(header, format)?, payload, width, height, level)
        }
        BlpFormat::PalettedAlpha8 => {
            let colors = palette_of(header, format)?;
            if header.alpha_from_palette() {
                palette::alpha8_from_palette(colors, payload, width, height, level)
            } else {
                palette::alpha8(colors, payload, width, height, level)
            }
        }
        BlpFormat::RawBgra => raw::bgra(payload, width, height, level),
        BlpFormat::Dxt1NoAlpha | BlpFormat::Dxt1Alpha1 => {
            dxt::decode(texpresso::Format::Bc1, payload, width, height, level)
        }
        BlpFormat::Dxt3Alpha4 | BlpFormat::Dxt3Alpha8 => {
            dxt::decode(texpresso::Format::Bc2, payload, width, height, level)
        }
        BlpFormat::Dxt5Alpha8 => dxt::decode(texpresso::Format::Bc3, payload, width, height, level),
        BlpFormat::Unsupported { .. } => Err(Error::UnsupportedFormat(format)),
    }
}

fn payload_slice<'a>(data: &'a [u8], offset: u32, length: u32, level: usize) -> Result<&'a [u8]> {
    let start = offset as usize;
    let end = start.saturating_add(length as usize);
    if end > data.len() {
        return Err(Error::TruncatedPayload {
            level,
            expected: length as usize,
            actual: data.len().saturating_sub(start),
        });
    }
    Ok(&data[start..end])
}

fn palette_of(header: &BlpHeader, format: BlpFormat) -> Result<&Palette> {
    header.palette().ok_or(Error::UnsupportedFormat(format))
}
