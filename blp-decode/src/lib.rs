//! Decoder for Blizzard BLP texture containers.
//!
//! BLP files come in two incompatible revisions, tagged `BLP1` and `BLP2`.
//! Both store a base image plus up to 16 progressively halved mip levels,
//! addressed through an offset/length table in the header. Pixel data is
//! palette-indexed (with several alpha encodings), raw BGRA, DXT
//! block-compressed, or an embedded JPEG stream.
//!
//! This crate parses the header of either revision and unpacks any stored
//! mip level into a [`PixelBuffer`] of blue/green/red/alpha bytes, rows top
//! to bottom. Decoding is stateless: the header is parsed once per byte
//! source and each decode call produces an independent buffer.
//!
//! ```no_run
//! use blp_decode::{decode_mipmap, parse_header};
//!
//! # fn main() -> blp_decode::Result<()> {
//! let data = std::fs::read("textures/icon.blp").expect("readable file");
//! let header = parse_header(&data)?;
//! println!("{}x{}, {}", header.width, header.height, header.format());
//! let pixels = decode_mipmap(&data, &header, 0)?;
//! # Ok(()) }
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod decode;
mod error;
pub mod parser;
pub mod types;

pub use decode::decode_mipmap;
pub use error::{Error, Result};
pub use parser::parse_header;
pub use types::{
    Bgra, Blp1Source, BlpFormat, BlpHeader, BlpVersion, ContentTag, HeaderVariant, MipTable,
    Palette, PixelBuffer,
};
