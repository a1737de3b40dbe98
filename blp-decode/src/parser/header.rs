use super::reader::Cursor;
use crate::error::{Error, Result};
use crate::types::{
    Blp1Source, BlpHeader, BlpVersion, ContentTag, HeaderVariant, MipTable, Palette,
};
use log::{trace, warn};

/// Parse a BLP header of either revision from the start of `input`.
///
/// Only the fixed layout is consumed; mip payloads stay untouched until a
/// decode call asks for them. After structural parsing the offsets array is
/// scanned for the leading non-zero count, which becomes the number of
/// available mip levels.
pub fn parse_header(input: &[u8]) -> Result<BlpHeader> {
    let mut reader = Cursor::new(input);

    let mut magic = [0u8; 4];
    reader.read_into(&mut magic)?;
    let version = BlpVersion::from_magic(magic)
        .ok_or_else(|| Error::WrongMagic(String::from_utf8_lossy(&magic).into_owned()))?;

    match version {
        BlpVersion::Blp1 => parse_blp1(&mut reader),
        BlpVersion::Blp2 => parse_blp2(&mut reader),
    }
}

fn parse_blp2(reader: &mut Cursor<'_>) -> Result<BlpHeader> {
    let content = parse_content_tag(reader)?;
    let encoding = reader.read_u8()?;
    let alpha_depth = reader.read_u8()?;
    let alpha_encoding = reader.read_u8()?;
    let mip_flag = reader.read_u8()?;
    let width = reader.read_u32_le()?;
    let height = reader.read_u32_le()?;
    let offsets = reader.read_u32_array16()?;
    let lengths = reader.read_u32_array16()?;
    let palette = parse_palette(reader)?;

    let mips = MipTable::new(offsets, lengths);
    trace!(
        "BLP2 header: {width}x{height}, encoding {encoding}, alpha depth {alpha_depth}, {} mip levels",
        mips.count()
    );

    Ok(BlpHeader {
        content,
        width,
        height,
        mips,
        variant: HeaderVariant::Blp2 {
            encoding,
            alpha_depth,
            alpha_encoding,
            mip_flag,
            palette,
        },
    })
}

fn parse_blp1(reader: &mut Cursor<'_>) -> Result<BlpHeader> {
    let content = parse_content_tag(reader)?;
    let flags = reader.read_u32_le()?;
    let width = reader.read_u32_le()?;
    let height = reader.read_u32_le()?;
    let alpha_encoding = reader.read_u32_le()?;
    // Trailing reserved word, unused by every known writer.
    let _ = reader.read_u32_le()?;
    let offsets = reader.read_u32_array16()?;
    let lengths = reader.read_u32_array16()?;

    let source = if content == ContentTag::Jpeg {
        let size = reader.read_u32_le()?;
        let header = reader.read_bytes(size as usize)?;
        trace!("BLP1 shared jpeg header: {size} bytes");
        Blp1Source::JpegHeader(header)
    } else {
        Blp1Source::Palette(parse_palette(reader)?)
    };

    let mips = MipTable::new(offsets, lengths);
    trace!(
        "BLP1 header: {width}x{height}, flags {flags:#x}, alpha encoding {alpha_encoding}, {} mip levels",
        mips.count()
    );

    Ok(BlpHeader {
        content,
        width,
        height,
        mips,
        variant: HeaderVariant::Blp1 {
            flags,
            alpha_encoding,
            source,
        },
    })
}

fn parse_content_tag(reader: &mut Cursor<'_>) -> Result<ContentTag> {
    let raw = reader.read_u32_le()?;
    if raw == 0 {
        Ok(ContentTag::Jpeg)
    } else {
        if raw != 1 {
            warn!("unexpected content type {raw}, treating as direct data");
        }
        Ok(ContentTag::Direct)
    }
}

fn parse_palette(reader: &mut Cursor<'_>) -> Result<Box<Palette>> {
    let bytes = reader.read_bytes(Palette::SIZE_BYTES)?;
    Ok(Box::new(Palette::from_bytes(&bytes)))
}
