use super::palette::Palette;
use super::version::BlpVersion;

/// Payload family selector stored in the `type` field of both revisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentTag {
    /// Mip payloads are JPEG streams.
    Jpeg,
    /// Mip payloads are direct pixel data, interpreted per encoding.
    Direct,
}

/// Per-mip byte spans stored in the header, plus the derived level count.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MipTable {
    offsets: [u32; 16],
    lengths: [u32; 16],
    count: usize,
}

impl MipTable {
    pub(crate) fn new(offsets: [u32; 16], lengths: [u32; 16]) -> Self {
        let count = offsets.iter().take_while(|&&offset| offset != 0).count();
        Self {
            offsets,
            lengths,
            count,
        }
    }

    /// Number of stored mip levels: leading non-zero offsets, at most 16.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Clamp a requested level into the valid range. Requests at or past the
    /// last stored level resolve to the last one, never an error.
    pub fn clamp_level(&self, level: usize) -> usize {
        if self.count == 0 {
            0
        } else {
            level.min(self.count - 1)
        }
    }

    /// Stored `(offset, length)` pair for a level, after clamping.
    pub fn span(&self, level: usize) -> (u32, u32) {
        let level = self.clamp_level(level);
        (self.offsets[level], self.lengths[level])
    }
}

/// Trailing data of a `BLP1` header: a palette for direct content, or the
/// JPEG header bytes shared by every mip level's stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Blp1Source {
    /// Inline 256-entry palette.
    Palette(Box<Palette>),
    /// Shared JPEG header blob, prepended to each mip payload before decode.
    JpegHeader(Vec<u8>),
}

/// Fields specific to one container revision. The two layouts are distinct
/// payload shapes and are never read through each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderVariant {
    /// `BLP1` fields.
    Blp1 {
        /// Raw flag word; bit 0x8 marks an alpha channel.
        flags: u32,
        /// Alpha sub-encoding selector (5 sources alpha from the palette).
        alpha_encoding: u32,
        /// Palette or shared JPEG header, depending on the content tag.
        source: Blp1Source,
    },
    /// `BLP2` fields.
    Blp2 {
        /// Encoding byte: 1 uncompressed paletted, 2 DXT, 3 raw BGRA.
        encoding: u8,
        /// Alpha bit depth: 0, 1, 4 or 8.
        alpha_depth: u8,
        /// Alpha encoding byte for DXT content: 0 DXT1, 1 DXT3, 7 DXT5.
        alpha_encoding: u8,
        /// Raw mip flag byte as stored in the file.
        mip_flag: u8,
        /// Inline 256-entry palette, present in every `BLP2` header.
        palette: Box<Palette>,
    },
}

/// Parsed BLP header. Built once per byte source, immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlpHeader {
    /// Whether mip payloads are JPEG streams or direct pixel data.
    pub content: ContentTag,
    /// Base image width in pixels, a power of two in well-formed files.
    pub width: u32,
    /// Base image height in pixels.
    pub height: u32,
    /// Mip level offset/length table.
    pub mips: MipTable,
    /// Revision-specific fields.
    pub variant: HeaderVariant,
}

impl BlpHeader {
    /// Container revision this header was parsed from.
    pub fn version(&self) -> BlpVersion {
        match self.variant {
            HeaderVariant::Blp1 { .. } => BlpVersion::Blp1,
            HeaderVariant::Blp2 { .. } => BlpVersion::Blp2,
        }
    }

    /// Number of stored mip levels.
    pub fn mip_count(&self) -> usize {
        self.mips.count()
    }

    /// Dimensions of a mip level, after clamping the index. Halving by shift
    /// may legitimately reach zero for narrow textures at deep levels; such
    /// levels decode to an empty buffer.
    pub fn mip_size(&self, level: usize) -> (u32, u32) {
        let level = self.mips.clamp_level(level);
        (self.width >> level, self.height >> level)
    }

    /// Stored byte span of a mip level, after clamping the index.
    pub fn mip_span(&self, level: usize) -> (u32, u32) {
        self.mips.span(level)
    }

    /// The header's palette, absent only for `BLP1` JPEG content.
    pub fn palette(&self) -> Option<&Palette> {
        match &self.variant {
            HeaderVariant::Blp1 {
                source: Blp1Source::Palette(palette),
                ..
            } => Some(palette),
            HeaderVariant::Blp1 {
                source: Blp1Source::JpegHeader(_),
                ..
            } => None,
            HeaderVariant::Blp2 { palette, .. } => Some(palette),
        }
    }

    /// JPEG header bytes shared by every mip stream. Empty unless this is a
    /// `BLP1` JPEG header; `BLP2` never stores a shared blob.
    pub fn shared_jpeg_header(&self) -> &[u8] {
        match &self.variant {
            HeaderVariant::Blp1 {
                source: Blp1Source::JpegHeader(header),
                ..
            } => header,
            _ => &[],
        }
    }
}
