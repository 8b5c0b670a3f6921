//! Error types for tile unscrambling.

use core::fmt;

/// The error type for tile unscrambling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The block width or height is zero.
    InvalidBlockSize,
    /// The pixel buffer does not match the declared dimensions, or the
    /// channel count is not between 1 and 4.
    InvalidRaster,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBlockSize => write!(f, "block width and height must be non-zero"),
            Self::InvalidRaster => write!(f, "pixel buffer does not match raster dimensions"),
        }
    }
}

impl core::error::Error for Error {}

/// Result type for tile unscrambling.
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

pub(crate) use bail;
