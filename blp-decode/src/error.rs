use crate::types::BlpFormat;
use thiserror::Error;

/// Result alias for decoder operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures produced by header parsing and mip-level decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The leading magic is neither `BLP1` nor `BLP2`.
    #[error("unexpected magic value {0:?}, the data is not a BLP1 or BLP2 container")]
    WrongMagic(String),
    /// The byte source ends inside the fixed header layout.
    #[error("data ends before the header layout is complete")]
    TruncatedHeader,
    /// A mip payload is smaller than its pixel format requires.
    #[error("mip level {level}: payload holds {actual} bytes but the format requires {expected}")]
    TruncatedPayload {
        /// Mip level the payload belongs to, after clamping.
        level: usize,
        /// Bytes the pixel format requires.
        expected: usize,
        /// Bytes actually available.
        actual: usize,
    },
    /// The classified format has no unpack routine.
    #[error("no decoder for format: {0}")]
    UnsupportedFormat(BlpFormat),
    /// The delegated JPEG codec rejected the embedded stream.
    #[error("jpeg codec failed: {0}")]
    Jpeg(#[from] image::ImageError),
}
