//! Error types for configuration pack decoding.

use core::fmt;

/// The main error type for configuration pack decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// Errors related to the key header.
    Header(HeaderError),
    /// Errors related to the encrypted payload.
    Payload(PayloadError),
}

/// Errors related to the key header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderError {
    /// The blob is shorter than the 128-character header.
    TooShort,
    /// The header is not valid base64 for three 32-byte keys.
    InvalidBase64,
}

/// Errors related to the encrypted payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayloadError {
    /// The body is not valid base64.
    InvalidBase64,
    /// The body decodes to zero bytes.
    Empty,
    /// The decrypted payload is not valid UTF-8.
    InvalidUtf8,
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(e) => write!(f, "{e}"),
            Self::Payload(e) => write!(f, "{e}"),
        }
    }
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooShort => write!(f, "blob is shorter than the key header"),
            Self::InvalidBase64 => write!(f, "invalid base64 in key header"),
        }
    }
}

impl fmt::Display for PayloadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidBase64 => write!(f, "invalid base64 in payload"),
            Self::Empty => write!(f, "payload is empty"),
            Self::InvalidUtf8 => write!(f, "decrypted payload is not valid UTF-8"),
        }
    }
}

impl core::error::Error for DecodeError {}
impl core::error::Error for HeaderError {}
impl core::error::Error for PayloadError {}

impl From<HeaderError> for DecodeError {
    fn from(e: HeaderError) -> Self {
        Self::Header(e)
    }
}

impl From<PayloadError> for DecodeError {
    fn from(e: PayloadError) -> Self {
        Self::Payload(e)
    }
}

/// Result type for configuration pack decoding.
pub type Result<T> = core::result::Result<T, DecodeError>;

macro_rules! bail {
    ($err:expr) => {
        return Err($err.into())
    };
}

macro_rules! err {
    ($err:expr) => {
        Err($err.into())
    };
}

pub(crate) use bail;
pub(crate) use err;
