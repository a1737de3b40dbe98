use std::fmt;

/// One four-channel color in blue/green/red/alpha order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bgra {
    /// Blue channel.
    pub b: u8,
    /// Green channel.
    pub g: u8,
    /// Red channel.
    pub r: u8,
    /// Alpha channel.
    pub a: u8,
}

/// Fixed 256-entry color table carried by paletted images.
#[derive(Clone, PartialEq, Eq)]
pub struct Palette([Bgra; 256]);

impl Palette {
    /// Serialized size: 256 colors, 4 bytes each.
    pub const SIZE_BYTES: usize = 256 * 4;

    /// Build a palette from explicit entries.
    pub fn new(colors: [Bgra; 256]) -> Self {
        Self(colors)
    }

    /// Deserialize from `SIZE_BYTES` of blue/green/red/alpha quadruples.
    pub(crate) fn from_bytes(bytes: &[u8]) -> Self {
        let mut colors = [Bgra::default(); 256];
        for (color, quad) in colors.iter_mut().zip(bytes.chunks_exact(4)) {
            *color = Bgra {
                b: quad[0],
                g: quad[1],
                r: quad[2],
                a: quad[3],
            };
        }
        Self(colors)
    }

    /// Color stored at a palette index.
    pub fn color(&self, index: u8) -> Bgra {
        self.0[index as usize]
    }
}

impl fmt::Debug for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Palette").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_keeps_channel_order() {
        let mut bytes = [0u8; Palette::SIZE_BYTES];
        bytes[4..8].copy_from_slice(&[1, 2, 3, 4]);
        let palette = Palette::from_bytes(&bytes);
        assert_eq!(
            palette.color(1),
            Bgra {
                b: 1,
                g: 2,
                r: 3,
                a: 4
            }
        );
        assert_eq!(palette.color(0), Bgra::default());
    }
}
