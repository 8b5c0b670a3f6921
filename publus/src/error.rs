//! Error types for page generation and image interception.

use core::fmt;

/// The main error type of this crate.
#[derive(Debug)]
pub enum Error {
    /// The configuration pack could not be decoded.
    Pack(publus_pack::DecodeError),
    /// The page image could not be unscrambled.
    Tiles(publus_tiles::Error),
    /// The URL fragment could not be decoded.
    Fragment(FragmentError),
    /// The decoded configuration could not be read.
    Config(ConfigError),
    /// The page image could not be decoded or encoded.
    Image(image::ImageError),
}

/// Errors related to the URL fragment of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentError {
    /// The fragment is not valid URL-safe base64.
    InvalidBase64,
    /// The fragment is not the expected JSON object, or could not be
    /// serialized as one.
    InvalidJson,
    /// A key is not 32 values in the byte range.
    InvalidKey,
}

/// Errors related to the decoded configuration document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The document is not valid JSON, or an entry has the wrong shape.
    InvalidJson,
    /// The `configuration` entry is missing.
    MissingConfiguration,
    /// A listed content file has no entry of its own.
    MissingPage,
    /// A content file lists no pages.
    EmptyPageList,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pack(e) => write!(f, "{e}"),
            Self::Tiles(e) => write!(f, "{e}"),
            Self::Fragment(e) => write!(f, "{e}"),
            Self::Config(e) => write!(f, "{e}"),
            Self::Image(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for FragmentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 => write!(f, "invalid base64 in page fragment"),
            Self::InvalidJson => write!(f, "invalid JSON in page fragment"),
            Self::InvalidKey => write!(f, "invalid key in page fragment"),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidJson => write!(f, "invalid configuration JSON"),
            Self::MissingConfiguration => write!(f, "configuration entry not found"),
            Self::MissingPage => write!(f, "page entry not found"),
            Self::EmptyPageList => write!(f, "page link list is empty"),
        }
    }
}

impl core::error::Error for Error {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Pack(e) => Some(e),
            Self::Tiles(e) => Some(e),
            Self::Fragment(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Image(e) => Some(e),
        }
    }
}

impl core::error::Error for FragmentError {}
impl core::error::Error for ConfigError {}

impl From<publus_pack::DecodeError> for Error {
    fn from(e: publus_pack::DecodeError) -> Self {
        Self::Pack(e)
    }
}

impl From<publus_tiles::Error> for Error {
    fn from(e: publus_tiles::Error) -> Self {
        Self::Tiles(e)
    }
}

impl From<FragmentError> for Error {
    fn from(e: FragmentError) -> Self {
        Self::Fragment(e)
    }
}

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Self::Image(e)
    }
}

/// Result type of this crate.
pub type Result<T> = core::result::Result<T, Error>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

pub(crate) use bail;
