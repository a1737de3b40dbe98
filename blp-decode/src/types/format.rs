use super::header::{BlpHeader, ContentTag, HeaderVariant};
use std::fmt;

pub(crate) const ENCODING_UNCOMPRESSED: u8 = 1;
pub(crate) const ENCODING_RAW_BGRA: u8 = 3;

pub(crate) const ALPHA_ENCODING_DXT1: u8 = 0;
pub(crate) const ALPHA_ENCODING_DXT3: u8 = 1;
pub(crate) const ALPHA_ENCODING_DXT5: u8 = 7;

const BLP1_FLAG_HAS_ALPHA: u32 = 0x8;
pub(crate) const BLP1_ALPHA_FROM_PALETTE: u32 = 5;

/// Canonical pixel format of a BLP image, derived once from the header.
///
/// Every variant except [`BlpFormat::Unsupported`] has an unpack routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlpFormat {
    /// Baseline JPEG payloads; `BLP1` shares one header blob across levels.
    Jpeg,
    /// One palette index per pixel, opaque.
    PalettedNoAlpha,
    /// Index plane followed by a bit-packed alpha plane.
    PalettedAlpha1,
    /// Index plane followed by a nibble-packed alpha plane.
    PalettedAlpha4,
    /// Index plane followed by a byte alpha plane. `BLP1` may instead source
    /// alpha from the palette, selected by its alpha sub-encoding.
    PalettedAlpha8,
    /// 4 bytes per pixel, blue/green/red/alpha.
    RawBgra,
    /// DXT1 blocks, opaque.
    Dxt1NoAlpha,
    /// DXT1 blocks with 1-bit punch-through alpha.
    Dxt1Alpha1,
    /// DXT3 blocks declared with 4-bit alpha.
    Dxt3Alpha4,
    /// DXT3 blocks declared with 8-bit alpha.
    Dxt3Alpha8,
    /// DXT5 blocks with interpolated alpha.
    Dxt5Alpha8,
    /// Header field combination with no known pixel layout.
    Unsupported {
        /// Raw encoding byte.
        encoding: u8,
        /// Raw alpha depth byte.
        alpha_depth: u8,
        /// Raw alpha encoding byte.
        alpha_encoding: u8,
    },
}

impl fmt::Display for BlpFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Jpeg => write!(f, "JPEG"),
            Self::PalettedNoAlpha => write!(f, "Uncompressed paletted image, no alpha"),
            Self::PalettedAlpha1 => write!(f, "Uncompressed paletted image, 1-bit alpha"),
            Self::PalettedAlpha4 => write!(f, "Uncompressed paletted image, 4-bit alpha"),
            Self::PalettedAlpha8 => write!(f, "Uncompressed paletted image, 8-bit alpha"),
            Self::RawBgra => write!(f, "Uncompressed raw 32-bit BGRA"),
            Self::Dxt1NoAlpha => write!(f, "DXT1, no alpha"),
            Self::Dxt1Alpha1 => write!(f, "DXT1, 1-bit alpha"),
            Self::Dxt3Alpha4 => write!(f, "DXT3, 4-bit alpha"),
            Self::Dxt3Alpha8 => write!(f, "DXT3, 8-bit alpha"),
            Self::Dxt5Alpha8 => write!(f, "DXT5, 8-bit alpha"),
            Self::Unsupported {
                encoding,
                alpha_depth,
                alpha_encoding,
            } => write!(
                f,
                "Unknown (encoding {encoding}, alpha depth {alpha_depth}, alpha encoding {alpha_encoding})"
            ),
        }
    }
}

impl BlpHeader {
    /// Derive the canonical pixel format. Total over any parsed header:
    /// combinations without a pixel layout classify as
    /// [`BlpFormat::Unsupported`] and fail at decode time instead.
    pub fn format(&self) -> BlpFormat {
        if self.content == ContentTag::Jpeg {
            return BlpFormat::Jpeg;
        }
        match &self.variant {
            // BLP1 direct content is always paletted; the flag word only
            // decides whether a separate 8-bit alpha plane exists. The
            // revision never stores raw BGRA, DXT, or 1/4-bit alpha.
            HeaderVariant::Blp1 { flags, .. } => {
                if flags & BLP1_FLAG_HAS_ALPHA != 0 {
                    BlpFormat::PalettedAlpha8
                } else {
                    BlpFormat::PalettedNoAlpha
                }
            }
            HeaderVariant::Blp2 {
                encoding,
                alpha_depth,
                alpha_encoding,
                ..
            } => match *encoding {
                ENCODING_UNCOMPRESSED => match alpha_depth {
                    0 => BlpFormat::PalettedNoAlpha,
                    1 => BlpFormat::PalettedAlpha1,
                    4 => BlpFormat::PalettedAlpha4,
                    8 => BlpFormat::PalettedAlpha8,
                    _ => BlpFormat::Unsupported {
                        encoding: *encoding,
                        alpha_depth: *alpha_depth,
                        alpha_encoding: *alpha_encoding,
                    },
                },
                ENCODING_RAW_BGRA => BlpFormat::RawBgra,
                _ => match (*alpha_depth, *alpha_encoding) {
                    (0, _) => BlpFormat::Dxt1NoAlpha,
                    (1, ALPHA_ENCODING_DXT1) => BlpFormat::Dxt1Alpha1,
                    (4, ALPHA_ENCODING_DXT3) => BlpFormat::Dxt3Alpha4,
                    (8, ALPHA_ENCODING_DXT3) => BlpFormat::Dxt3Alpha8,
                    (8, ALPHA_ENCODING_DXT5) => BlpFormat::Dxt5Alpha8,
                    _ => BlpFormat::Unsupported {
                        encoding: *encoding,
                        alpha_depth: *alpha_depth,
                        alpha_encoding: *alpha_encoding,
                    },
                },
            },
        }
    }

    /// True for the `BLP1` sub-encoding that sources alpha from the
    /// palette's own alpha channel (inverted) instead of a separate plane.
    pub(crate) fn alpha_from_palette(&self) -> bool {
        match &self.variant {
            HeaderVariant::Blp1 { alpha_encoding, .. } => {
                *alpha_encoding == BLP1_ALPHA_FROM_PALETTE
            }
            HeaderVariant::Blp2 { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Blp1Source, MipTable, Palette};

    fn blp2_header(content: ContentTag, encoding: u8, alpha_depth: u8, alpha_encoding: u8) -> BlpHeader {
        BlpHeader {
            content,
            width: 16,
            height: 16,
            mips: MipTable::new([0; 16], [0; 16]),
            variant: HeaderVariant::Blp2 {
                encoding,
                alpha_depth,
                alpha_encoding,
                mip_flag: 0,
                palette: Box::new(Palette::new([Default::default(); 256])),
            },
        }
    }

    fn blp1_header(content: ContentTag, flags: u32, alpha_encoding: u32) -> BlpHeader {
        let source = if content == ContentTag::Jpeg {
            Blp1Source::JpegHeader(Vec::new())
        } else {
            Blp1Source::Palette(Box::new(Palette::new([Default::default(); 256])))
        };
        BlpHeader {
            content,
            width: 16,
            height: 16,
            mips: MipTable::new([0; 16], [0; 16]),
            variant: HeaderVariant::Blp1 {
                flags,
                alpha_encoding,
                source,
            },
        }
    }

    #[test]
    fn blp2_classification() {
        use BlpFormat::*;
        assert_eq!(blp2_header(ContentTag::Jpeg, 1, 0, 0).format(), Jpeg);
        assert_eq!(blp2_header(ContentTag::Direct, 1, 0, 0).format(), PalettedNoAlpha);
        assert_eq!(blp2_header(ContentTag::Direct, 1, 1, 0).format(), PalettedAlpha1);
        assert_eq!(blp2_header(ContentTag::Direct, 1, 4, 0).format(), PalettedAlpha4);
        assert_eq!(blp2_header(ContentTag::Direct, 1, 8, 0).format(), PalettedAlpha8);
        assert_eq!(blp2_header(ContentTag::Direct, 3, 8, 0).format(), RawBgra);
        assert_eq!(blp2_header(ContentTag::Direct, 2, 0, 0).format(), Dxt1NoAlpha);
        assert_eq!(blp2_header(ContentTag::Direct, 2, 1, 0).format(), Dxt1Alpha1);
        assert_eq!(blp2_header(ContentTag::Direct, 2, 4, 1).format(), Dxt3Alpha4);
        assert_eq!(blp2_header(ContentTag::Direct, 2, 8, 1).format(), Dxt3Alpha8);
        assert_eq!(blp2_header(ContentTag::Direct, 2, 8, 7).format(), Dxt5Alpha8);
    }

    #[test]
    fn blp2_unknown_combinations_are_unsupported() {
        assert_eq!(
            blp2_header(ContentTag::Direct, 1, 3, 0).format(),
            BlpFormat::Unsupported {
                encoding: 1,
                alpha_depth: 3,
                alpha_encoding: 0
            }
        );
        assert_eq!(
            blp2_header(ContentTag::Direct, 2, 8, 2).format(),
            BlpFormat::Unsupported {
                encoding: 2,
                alpha_depth: 8,
                alpha_encoding: 2
            }
        );
    }

    #[test]
    fn blp1_classification_is_paletted_or_jpeg() {
        assert_eq!(blp1_header(ContentTag::Jpeg, 0, 0).format(), BlpFormat::Jpeg);
        assert_eq!(
            blp1_header(ContentTag::Direct, 0, 0).format(),
            BlpFormat::PalettedNoAlpha
        );
        assert_eq!(
            blp1_header(ContentTag::Direct, 0x8, 4).format(),
            BlpFormat::PalettedAlpha8
        );
        // Other flag bits do not grant an alpha channel.
        assert_eq!(
            blp1_header(ContentTag::Direct, 0x4, 0).format(),
            BlpFormat::PalettedNoAlpha
        );
    }

    #[test]
    fn alpha_from_palette_needs_sub_encoding_five() {
        assert!(blp1_header(ContentTag::Direct, 0x8, 5).alpha_from_palette());
        assert!(!blp1_header(ContentTag::Direct, 0x8, 4).alpha_from_palette());
        assert!(!blp2_header(ContentTag::Direct, 1, 8, 5).alpha_from_palette());
    }
}
